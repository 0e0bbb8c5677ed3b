use critbit::{CritBitTree, RecordBuf};
use tracing_subscriber::EnvFilter;

fn main() -> critbit::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cat = RecordBuf::c_str(b"cat")?;
    let car = RecordBuf::c_str(b"car")?;
    let dog = RecordBuf::c_str(b"dog")?;

    let mut tree = CritBitTree::new();
    for record in [&cat, &car, &dog] {
        tree.insert(record.as_record())?;
    }
    print!("{tree:?}");

    tree.remove(cat.as_record());
    println!("cat: {:?}", tree.search(cat.as_record()));
    println!("car: {:?}", tree.search(car.as_record()));
    print!("{tree:?}");
    Ok(())
}
