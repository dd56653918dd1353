use std::io::Read;

use memfs_kit::{FsBackend, MemoryFS, walk_dir};

fn main() -> anyhow::Result<()> {
    let mut fs = MemoryFS::new();

    // creates `docs` and `docs/drafts` in memory
    fs.mkdir_all("docs/drafts", 0o755)?;

    // parent directories must exist before writing a file
    fs.write_file("docs/first.txt", b"Hello", 0o644)?;
    fs.write_file("/second.txt", b"World", 0o644)?;

    // opens a fresh cursor over the stored content
    let mut first = String::new();
    fs.open("docs/first.txt")?.read_to_string(&mut first)?;

    let second = String::from_utf8(fs.read_file("second.txt")?)?;
    println!("{}, {}!", first, second);

    // writing into a directory that doesn't exist fails
    let err = fs.write_file("missing/third.txt", b"!", 0o644).unwrap_err();
    println!("expected failure: {}", err);

    // prints the whole tree in a stable order
    walk_dir(&fs, ".", |path, entry| {
        let kind = if entry.is_dir() { "dir " } else { "file" };
        println!("{} {:>4o} {}", kind, entry.metadata().mode(), path);
        Ok(())
    })?;

    Ok(())
}
