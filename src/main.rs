fn main() {
    glyphline::cli::run();
}
