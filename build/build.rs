use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

mod attacks;

fn main() {
    generate_lookup_maps();

    println!("cargo:rerun-if-changed=build/build.rs");
    println!("cargo:rerun-if-changed=build/attacks.rs");
}

fn generate_lookup_maps() {
    let dir = env::var("OUT_DIR").unwrap();
    let path = Path::new(&dir).join("lookup.rs");
    let out = File::create(path).unwrap();
    write(BufWriter::new(out)).unwrap();
}

fn write(mut buf: BufWriter<File>) -> Result<(), std::io::Error> {
    macro_rules! write_map {
        ($name:tt, $type:tt, $items:expr) => {
            writeln!(buf, "static {}: [{}; {}] = {:?};", $name, $type, $items.len(), $items)?;
        };
    }

    write_map!("KNIGHT_MAP", "u64", attacks::generate_knight_map());
    write_map!("DIAGONAL_MAP", "u64", attacks::generate_diagonal_map());
    write_map!("BETWEEN_MAP", "u64", attacks::generate_between_map());

    buf.flush()
}
