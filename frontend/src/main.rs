fn main() {
    teamspace_frontend::run();
}
