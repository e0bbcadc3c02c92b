fn main() {
    facad::app::cli::run();
}
