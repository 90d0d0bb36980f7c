use group_framework::{chunks_of, runs, GroupStream, Groups, Runs};
use parser_framework::{Cursor, ParseContext, Producer};
use producer_framework::{from_iter, from_iter_with, Iter};

type IntRuns = Groups<Cursor<Iter<std::vec::IntoIter<i32>, &'static str>>, Runs<i32>>;

fn runs_of(items: Vec<i32>) -> IntRuns {
    Groups::new(Cursor::new(from_iter_with(items, "end")), runs())
}

#[test]
fn test_take_groups() {
    let (items, rest) = runs_of(vec![1, 1, 2, 3, 3]).take_groups(2).concat().collect_all();
    assert_eq!(items, vec![1, 1, 2]);
    assert_eq!(rest.collect_all(), (vec![3, 3], "end"));
}

#[test]
fn test_take_zero_groups_reads_nothing() {
    let mut taken = runs_of(vec![1, 2]).take_groups(0);
    assert!(taken.next_group().is_none());
    let rest = taken.into_rest();
    assert_eq!(rest.offset(), 0);
    assert_eq!(rest.collect_all(), (vec![1, 2], "end"));
}

#[test]
fn test_take_groups_closes_last_group() {
    let mut taken = runs_of(vec![1, 1, 2]).take_groups(1);
    let mut group = taken.next_group().unwrap();
    assert_eq!(group.draw(), Some(1));
    assert!(taken.next_group().is_none());
    assert_eq!(taken.draw_in_group(), None);
    let rest = taken.into_rest();
    assert_eq!(rest.collect_all(), (vec![1, 2], "end"));
}

#[test]
fn test_drop_groups() {
    let items: Vec<_> = runs_of(vec![1, 1, 2, 3, 3])
        .drop_groups(2)
        .concat()
        .elements()
        .collect();
    assert_eq!(items, vec![3, 3]);
}

#[test]
fn test_drop_more_groups_than_exist() {
    let (items, rest) = runs_of(vec![1, 2]).drop_groups(5).concat().collect_all();
    assert!(items.is_empty());
    assert_eq!(rest.drain(), "end");
}

#[test]
fn test_drop_then_take_is_a_window() {
    let (items, _) = runs_of(vec![1, 1, 2, 2, 3, 3, 4, 4])
        .drop_groups(1)
        .take_groups(2)
        .concat()
        .collect_all();
    assert_eq!(items, vec![2, 2, 3, 3]);
}

#[test]
fn test_take_then_drop_order_matters() {
    let (items, _) = runs_of(vec![1, 1, 2, 2, 3, 3, 4, 4])
        .take_groups(2)
        .drop_groups(1)
        .concat()
        .collect_all();
    assert_eq!(items, vec![2, 2]);
}

#[test]
fn test_indices_survive_transforms() {
    let mut window = runs_of(vec![1, 2, 3, 4]).drop_groups(1).take_groups(2);
    let mut indices = Vec::new();
    while let Some(mut group) = window.next_group() {
        indices.push(group.index());
        group.draw_all();
    }
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_filter_groups_by_index() {
    let groups = Groups::new(Cursor::new(from_iter(1..=9)), chunks_of(2));
    let (items, _) = groups.filter_groups(|index| index % 2 == 0).concat().collect_all();
    assert_eq!(items, vec![1, 2, 5, 6, 9]);
}

#[test]
fn test_transforms_on_borrowed_stream() {
    let mut groups = runs_of(vec![1, 2, 2, 3]);
    let first: Vec<_> = (&mut groups).take_groups(2).concat().elements().collect();
    assert_eq!(first, vec![1, 2, 2]);
    assert_eq!(groups.next_group().unwrap().draw_all(), vec![3]);
}

#[test]
fn test_transforms_stay_lazy_on_infinite_stream() {
    let groups = Groups::new(Cursor::new(from_iter(0u64..)), chunks_of(10));
    let mut window = groups.drop_groups(3).take_groups(1000).concat();
    let head: Vec<_> = window.elements().take(5).collect();
    assert_eq!(head, vec![30, 31, 32, 33, 34]);
}
