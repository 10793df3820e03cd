use dusk_ngin::math::{Tuple, Tuple3F, Tuple3I, Tuple4F};

#[test]
fn default_construction_zero_initializes() {
    let tuple = Tuple3I::default();
    assert_eq!(0, tuple[0]);
    assert_eq!(0, tuple[1]);
    assert_eq!(0, tuple[2]);
}

#[test]
fn array_construction() {
    let tuple = Tuple3I::new([1, 2, 3]);
    assert_eq!(1, tuple[0]);
    assert_eq!(2, tuple[1]);
    assert_eq!(3, tuple[2]);
}

#[test]
fn set_replaces_all_elements() {
    let mut tuple = Tuple3I::default();
    tuple.set([100, 100, 100]);
    assert_eq!(100, tuple[0]);
    assert_eq!(100, tuple[1]);
    assert_eq!(100, tuple[2]);
}

#[test]
fn relational_operators() {
    let tuple0 = Tuple3I::default();
    let mut tuple1 = Tuple3I::default();
    assert!(tuple0 == tuple1);
    assert!(!(tuple0 != tuple1));
    assert!(!(tuple0 < tuple1));
    assert!(!(tuple0 > tuple1));
    assert!(tuple0 <= tuple1);
    assert!(tuple0 >= tuple1);

    tuple1.set([1, 1, 1]);
    assert!(tuple0 != tuple1);
    assert!(tuple0 < tuple1);
    assert!(!(tuple0 > tuple1));
    assert!(tuple0 <= tuple1);
    assert!(!(tuple0 >= tuple1));
}

#[test]
fn ordering_is_lexicographic() {
    // The first differing element decides, regardless of the rest.
    assert!(Tuple3I::new([1, 9, 9]) < Tuple3I::new([2, 0, 0]));
    assert!(Tuple3I::new([1, 2, 3]) < Tuple3I::new([1, 2, 4]));
    assert!(Tuple3I::new([2, 0, 0]) > Tuple3I::new([1, 9, 9]));
}

#[test]
fn unary_negation() {
    let tuple = -Tuple3I::new([1, 2, 3]);
    assert_eq!(-1, tuple[0]);
    assert_eq!(-2, tuple[1]);
    assert_eq!(-3, tuple[2]);
}

#[test]
fn length_matches_arity() {
    assert_eq!(3, Tuple3I::default().len());
    assert_eq!(4, Tuple4F::default().len());
}

#[test]
fn scalar_multiplication() {
    let mut tuple = Tuple3I::new([1, 2, 3]);
    tuple *= 3;
    assert_eq!(Tuple3I::new([3, 6, 9]), tuple);
}

#[test]
fn tuple_multiplication_is_element_wise() {
    let mut tuple = Tuple3I::new([1, 2, 3]);
    tuple *= Tuple3I::new([1, 2, 3]);
    assert_eq!(Tuple3I::new([1, 4, 9]), tuple);
}

#[test]
fn scalar_addition_and_subtraction_broadcast() {
    let mut tuple = Tuple3I::new([0, 1, 2]);
    tuple += 4;
    assert_eq!(Tuple3I::new([4, 5, 6]), tuple);
    tuple -= 4;
    assert_eq!(Tuple3I::new([0, 1, 2]), tuple);
}

#[test]
fn addition_then_subtraction_round_trips() {
    let a = Tuple3F::new([0.25, -1.5, 3.75]);
    let b = Tuple3F::new([10.5, 0.125, -2.25]);
    assert_eq!(a, a + b - b);
}

#[test]
fn integer_equality_is_exact() {
    assert_ne!(Tuple3I::new([1, 2, 3]), Tuple3I::new([1, 2, 4]));
}

#[test]
fn float_equality_is_epsilon_tolerant() {
    let lhs = Tuple3F::new([1.0, 2.0, 3.0]);
    assert_eq!(lhs, Tuple3F::new([1.00005, 2.0, 3.0]));
    assert_ne!(lhs, Tuple3F::new([1.001, 2.0, 3.0]));
}

#[test]
fn clamp_family_saturates_in_place() {
    let mut tuple = Tuple3I::new([-5, 0, 5]);
    tuple.clamp_min(-1);
    assert_eq!(Tuple3I::new([-1, 0, 5]), tuple);
    tuple.clamp_max(3);
    assert_eq!(Tuple3I::new([-1, 0, 3]), tuple);

    let mut tuple = Tuple3I::new([-5, 0, 5]);
    tuple.clamp(-1, 1);
    assert_eq!(Tuple3I::new([-1, 0, 1]), tuple);
}

#[test]
fn mutators_chain() {
    let mut tuple = Tuple3I::new([-5, 0, 5]);
    tuple.clamp_min(-2).clamp_max(2).set([7, 8, 9]);
    assert_eq!(Tuple3I::new([7, 8, 9]), tuple);
}

#[test]
fn dot_product_over_any_arity() {
    let lhs = Tuple::<i32, 5>::new([1, 2, 3, 4, 5]);
    let rhs = Tuple::<i32, 5>::new([5, 4, 3, 2, 1]);
    assert_eq!(35, lhs.dot(&rhs));
}

#[test]
fn contiguous_slice_view() {
    let tuple = Tuple3F::new([1.0, 2.0, 3.0]);
    assert_eq!(&[1.0, 2.0, 3.0], tuple.as_slice());
}
