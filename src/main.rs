use circular_list::collections::circ::CircularSinglyLinkedList;

fn main() {
    println!("\n[CircularSinglyLinkedList]\n");

    let mut list = CircularSinglyLinkedList::<u8>::new();
    println!("{list}");

    for i in 1..=3 {
        list.append(i);
        println!("{list}");
    }

    list.prepend(0);
    println!("{list}");

    list.insert(2, 100);
    list.insert(-1, 200);
    list.insert(isize::MIN, 255);
    println!("{list:?}");

    for value in list.iter_mut() {
        *value = value.wrapping_mul(2);
    }
    println!("{list}, len = {}", list.len());

    list.clear();
    println!("{list}, empty = {}", list.is_empty());
}
