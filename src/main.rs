fn main() {
    six_cities::run();
}
