//! Trunk binary target. The app itself lives in the library crate.

fn main() {
    #[cfg(feature = "csr")]
    portfolio::start();
}
