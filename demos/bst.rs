use treecheck::binary_search_tree::BinarySearchTree;
use treecheck::data_gen::{
    generate_ascending_keys, generate_keys_with_duplicates, generate_normal_keys,
    generate_uniform_keys,
};
use treecheck::report::analyze_pair;

fn main() {
    let mut bst = BinarySearchTree::new();
    bst.pretty_print();
    for &key in &[50, 25, 75, 12, 37, 62, 87] {
        bst.insert(key);
    }
    bst.pretty_print();
    print!("{}", analyze_pair(&bst, &[25, 12, 37]));

    // unbalanced tree
    let skewed = BinarySearchTree::new_with_keys(&generate_ascending_keys(5, 1));
    skewed.pretty_print();
    print!("{}", analyze_pair(&skewed, &[4]));

    let random = BinarySearchTree::new_with_keys(&generate_uniform_keys(12, -20, 20));
    random.pretty_print();
    print!("{}", analyze_pair(&random, &[]));

    // clustered keys collide often; duplicates are absorbed
    if let Ok(keys) = generate_normal_keys(40, 0.0, 8.0) {
        let clustered = BinarySearchTree::new_with_keys(&keys);
        println!("{} keys -> {} nodes", keys.len(), clustered.len());
        clustered.pretty_print();
        print!("{}", analyze_pair(&clustered, &keys[..1]));
    }

    let repeated = generate_keys_with_duplicates(15, 0.3);
    let tree = BinarySearchTree::new_with_keys(&repeated);
    println!("{:?} -> {} nodes", repeated, tree.len());
    print!("{}", analyze_pair(&tree, &[]));
}
