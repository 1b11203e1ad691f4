use std::env;
use std::fs;
use std::path::PathBuf;

const BOOT_SECTOR_SIZE: usize = 512;
// cli; hlt; jmp $-1
const HALT: [u8; 4] = [0xFA, 0xF4, 0xEB, 0xFD];

/// Jumps over the BPB straight into a halt loop
fn placeholder_boot_sector() -> Vec<u8> {
    let mut bytes = vec![0u8; BOOT_SECTOR_SIZE];
    bytes[..3].copy_from_slice(&[0xEB, 0x58, 0x90]);
    bytes[90..90 + HALT.len()].copy_from_slice(&HALT);
    bytes[510..].copy_from_slice(&[0x55, 0xAA]);
    bytes
}

fn embed(var: &str, name: &str, placeholder: fn() -> Vec<u8>) {
    println!("cargo:rerun-if-env-changed={}", var);
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap()).join(name);
    match env::var_os(var) {
        Some(path) => {
            println!("cargo:rerun-if-changed={}", PathBuf::from(&path).display());
            fs::copy(&path, &out).unwrap_or_else(|e| panic!("{}: {:?}: {}", var, path, e));
        }
        None => {
            println!("cargo:warning={} not set, embedding a halting placeholder {}", var, name);
            fs::write(&out, placeholder()).unwrap();
        }
    }
}

fn main() {
    embed("IYASB_BOOTSECTOR_BIN", "bootsector.bin", placeholder_boot_sector);
    embed("IYASB_STAGE2_BIN", "stage2.bin", || HALT.to_vec());
}
