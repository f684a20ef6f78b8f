use ringlist::{
    josephus::{last_man_standing, last_man_standing_bidirectional},
    prelude::*,
    primes::first_n_primes,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    print!("first 10 primes: ");
    first_n_primes(10).print();

    let mut list: LinkedList<i64> = (1..12).map(|i| i * (i + 1)).collect();
    print!("list: ");
    list.print();

    // every other element, from the back
    let len = list.len();
    for i in (0..len).rev().step_by(2) {
        list.remove(i)?;
    }
    print!("every other removed: ");
    list.print();

    let len = list.len();
    for i in (0..=len * 2).step_by(2) {
        list.insert(((i + 1) * (i + 3)) as i64, i)?;
    }
    print!("refilled: ");
    list.print();

    let mut ring = CircularList::people(7);
    print!("ring: ");
    ring.print();
    println!("eliminated every 3rd: {:?}", ring.josephus_sequence(3)?);

    let mut ring = CircularDoublyLinkedList::people(7);
    println!("eliminated every 3rd backwards: {:?}", ring.josephus_sequence(-3)?);

    println!("last man standing of 68, every 7th: {}", last_man_standing(68, 7)?);
    println!(
        "last man standing of 68, every 7th backwards: {}",
        last_man_standing_bidirectional(68, -7)?
    );

    Ok(())
}
