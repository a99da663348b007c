/// Invoices are issued in pounds sterling.
pub const CURRENCY_SYMBOL: char = '£';

pub fn format_amount(amount: i64) -> String {
    if amount < 0 {
        format!("-{CURRENCY_SYMBOL}{}", amount.unsigned_abs())
    } else {
        format!("{CURRENCY_SYMBOL}{amount}")
    }
}
