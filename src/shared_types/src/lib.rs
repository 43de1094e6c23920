//! Shell-side type definitions are generated by `build.rs` into `generated/`.
