fn main() {
    quoinstone_frontend::start();
}
