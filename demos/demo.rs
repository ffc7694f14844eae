use avl::Tree;

fn main() {
    let mut tree = Tree::new();

    println!("Inserting values: 10, 20, 30, 40, 50, 25");
    for value in [10, 20, 30, 40, 50, 25] {
        tree.insert(value);
    }

    print!("Inorder:");
    for value in &tree {
        print!(" {}", value);
    }
    println!();

    print!("Level order:");
    for (value, height) in tree.level_order() {
        print!(" {}(h:{})", value, height);
    }
    println!();

    println!("Tree height: {}", tree.height());
}
