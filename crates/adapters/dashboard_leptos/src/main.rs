fn main() {
    rnr_dashboard::start();
}
