use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const MOD: &[u8] = b"
pub use self::cast_channel::*;

mod cast_channel;
";

fn main() {
    fs::create_dir_all("src/proto").expect("Failed to create src/proto");

    protobuf_codegen_pure::Codegen::new()
        .out_dir("src/proto")
        .input("proto/cast_channel.proto")
        .include("proto")
        .run()
        .expect("protoc");

    let dest_path = Path::new(".").join("src/proto/mod.rs");
    let mut f = File::create(&dest_path).expect("Failed to create proto/mod.rs");
    f.write_all(MOD).expect("Failed to write proto/mod.rs");

    println!("cargo:rerun-if-changed=proto/cast_channel.proto");
}
