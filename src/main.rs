/// Binary entrypoint for the `obgen` executable.
///
/// Keeps the binary thin — all business logic lives in the `obgen_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    obgen_lib::run();
}
