fn main() {
    termprompt::app::cli::run();
}
