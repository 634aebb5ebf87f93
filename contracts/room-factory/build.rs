//! Compiles the `room` contract to WASM so host-side tests can upload it and
//! let the factory deploy real rooms.
//!
//! The WASM lands in `OUT_DIR/room.wasm` and the `room_wasm` cfg is set. When
//! no WASM target is installed the cfg stays unset and `testutils::room_wasm`
//! returns `None`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const WASM_TARGETS: [(&str, &str); 2] = [
    ("wasm32v1-none", ""),
    ("wasm32-unknown-unknown", "-Ctarget-cpu=mvp"),
];

fn main() {
    println!("cargo:rerun-if-changed=../room/src");
    println!("cargo:rerun-if-changed=../room/Cargo.toml");
    println!("cargo:rustc-check-cfg=cfg(room_wasm)");

    // Building the factory itself for the chain: nothing to embed.
    if env::var("CARGO_CFG_TARGET_FAMILY").as_deref() == Ok("wasm") {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".into());
    let target_dir = out_dir.join("room-target");

    for (target, rustflags) in WASM_TARGETS {
        let status = Command::new(&cargo)
            .current_dir(manifest_dir.join("../room"))
            .args(["build", "--release", "--package", "room", "--target", target])
            .arg("--target-dir")
            .arg(&target_dir)
            .env("CARGO_ENCODED_RUSTFLAGS", rustflags)
            .env_remove("RUSTFLAGS")
            .env_remove("CARGO_TARGET_DIR")
            .env_remove("CARGO_BUILD_TARGET")
            .status();

        let built = target_dir.join(target).join("release").join("room.wasm");
        if matches!(status, Ok(s) if s.success()) && built.exists() {
            fs::copy(&built, out_dir.join("room.wasm")).expect("copy room.wasm into OUT_DIR");
            println!("cargo:rustc-cfg=room_wasm");
            return;
        }
    }

    println!(
        "cargo:warning=room contract WASM not built; install the wasm32v1-none target to run deployment tests"
    );
}
