use cursor_seq::Sequence;

#[cfg_attr(test, test)]
fn main() {
    let mut seq = Sequence::new();

    seq.add_after(1.0);
    seq.add_after(2.0);
    seq.add_after(3.0);
    println!("{seq:?}"); // > [1.0, 2.0, 3.0]

    seq.start();
    assert_eq!(seq.current(), Ok(&1.0));

    seq.advance().unwrap();
    assert_eq!(seq.current(), Ok(&2.0));
    assert_eq!(seq.previous(), Some(&1.0));

    // remove the middle element; the cursor follows to its successor
    let removed = seq.remove_current().unwrap();
    assert_eq!(removed, 2.0);
    assert_eq!(seq.current(), Ok(&3.0));
    println!("{seq:?}"); // > [1.0, 3.0]

    seq.add_before(2.5);
    println!("{seq:?}"); // > [1.0, 2.5, 3.0]

    // walking off the end leaves no current element
    seq.advance().unwrap();
    seq.advance().unwrap();
    assert!(!seq.is_current());

    // a clone carries its own copy of the chain and the cursor position
    seq.start();
    let mut copy = seq.clone();
    copy.add_after(9.0);
    println!("{seq:?}"); // > [1.0, 2.5, 3.0]
    println!("{copy:?}"); // > [1.0, 9.0, 2.5, 3.0]

    let joined = Sequence::concatenation(&seq, &copy);
    println!("{joined:?}"); // > [1.0, 2.5, 3.0, 1.0, 9.0, 2.5, 3.0]
}
