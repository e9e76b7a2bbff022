use algokit::sorting::bubble_sort::{bubble_sort, bubble_sort_basic};

#[test]
fn bubble_sort_worked_example() {
    let mut arr = [1, 10, 2, 4, 7, 5, 6, 8, 9, 3];
    bubble_sort(&mut arr);
    assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn bubble_sort_is_idempotent() {
    let mut arr = [1, 2, 3, 4, 5];
    bubble_sort(&mut arr);
    assert_eq!(arr, [1, 2, 3, 4, 5]);
}

#[test]
fn bubble_sort_is_a_permutation() {
    let original = [4, 1, 4, 2, 9, 9, 0, 3];
    let mut sorted = original;
    bubble_sort(&mut sorted);

    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn bubble_sort_reverse_input() {
    let mut arr: Vec<i32> = (0..50).rev().collect();
    bubble_sort(&mut arr);
    let expected: Vec<i32> = (0..50).collect();
    assert_eq!(arr, expected);
}

#[test]
fn bubble_sort_trivial_inputs() {
    let mut empty: [i32; 0] = [];
    bubble_sort(&mut empty);
    assert_eq!(empty, []);

    let mut single = [42];
    bubble_sort(&mut single);
    assert_eq!(single, [42]);
}

#[test]
fn both_forms_agree() {
    let inputs: Vec<Vec<i32>> = vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![1, 10, 2, 4, 7, 5, 6, 8, 9, 3],
        vec![5, 5, 5, 1, 1],
        (0..40).rev().collect(),
    ];
    for input in inputs {
        let mut a = input.clone();
        let mut b = input.clone();
        bubble_sort(&mut a);
        bubble_sort_basic(&mut b);
        assert_eq!(a, b, "forms disagree on {input:?}");
    }
}
