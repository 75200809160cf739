#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn v4_bmp(width: i32, height: i32, pixel_rows: &[&[u8]]) -> Vec<u8> {
    let mut bmp = vec![0u8; 122]; // 14 file header + 108 BITMAPV4HEADER
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[10..14].copy_from_slice(&122u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&108u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    for row in pixel_rows {
        bmp.extend_from_slice(row);
    }
    let len = bmp.len() as u32;
    bmp[2..6].copy_from_slice(&len.to_le_bytes()); // file size
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 red, padded to 4 bytes
    fs::write(format!("{dir}/v4_1x1.bmp"), v4_bmp(1, 1, &[&[0x00, 0x00, 0xff, 0x00]])).unwrap();

    // 3x2 bottom-up, 3 padding bytes per row
    let row = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, 0, 0, 0];
    fs::write(format!("{dir}/v4_3x2.bmp"), v4_bmp(3, 2, &[&row, &row])).unwrap();

    // 2x2 top-down
    let row = [0xff; 8];
    fs::write(format!("{dir}/v4_2x2_topdown.bmp"), v4_bmp(2, -2, &[&row, &row])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut info_header = v4_bmp(1, 1, &[&[0, 0, 0, 0]]);
    info_header[14..18].copy_from_slice(&40u32.to_le_bytes());
    fs::write(format!("{dir}/info_header.bmp"), info_header).unwrap();
    fs::write(format!("{dir}/zero_width.bmp"), v4_bmp(0, 1, &[&[0, 0, 0, 0]])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
