use parser_framework::{
    everything, take, take_while, BoundRule, Cursor, ParseContext, Producer, View,
};
use producer_framework::{from_iter, from_iter_with};

fn cursor_over(items: Vec<i32>) -> Cursor<producer_framework::Iter<std::vec::IntoIter<i32>, &'static str>> {
    Cursor::new(from_iter_with(items, "end"))
}

#[test]
fn test_split_count_conserves_elements() {
    let mut cursor = cursor_over(vec![1, 2, 3, 4, 5, 6]);
    let mut bounded = cursor.split(take(3));
    assert_eq!(bounded.draw_all(), vec![1, 2, 3]);
    let continuation = bounded.resume();
    assert_eq!(continuation.draw_all(), vec![4, 5, 6]);
}

#[test]
fn test_split_without_drawing_leaves_parent_untouched() {
    let mut cursor = cursor_over(vec![1, 2, 3]);
    let bounded = cursor.split(take(2));
    let continuation = bounded.resume();
    assert_eq!(continuation.draw(), Some(1));
}

#[test]
fn test_split_count_larger_than_input() {
    let mut cursor = cursor_over(vec![1, 2]);
    let mut bounded = cursor.split(take(10));
    assert_eq!(bounded.draw_all(), vec![1, 2]);
    bounded.resume();
    assert!(cursor.is_end_of_input());
    assert_eq!(cursor.drain(), "end");
}

#[test]
fn test_split_count_zero_is_empty() {
    let mut cursor = cursor_over(vec![1, 2]);
    assert!(cursor.zoom(take(0), |view| view.is_end_of_input()));
    assert_eq!(cursor.draw(), Some(1));
}

#[test]
fn test_take_zero_never_pulls_from_parent() {
    let mut cursor = cursor_over(vec![1]);
    let mut view = View::new(&mut cursor, take(0));
    assert_eq!(view.draw(), None);
    assert!(view.is_closed());
    view.resume();
    assert_eq!(cursor.offset(), 0);
    assert!(cursor.pending().is_empty());
}

#[test]
fn test_predicate_rejecting_first_element() {
    let mut cursor = cursor_over(vec![1, 2, 3]);
    let mut bounded = cursor.split(take_while(|x: &i32| *x > 5));
    assert_eq!(bounded.draw(), None);
    let continuation = bounded.resume();
    assert_eq!(continuation.draw_all(), vec![1, 2, 3]);
}

#[test]
fn test_predicate_split_point_is_lazy() {
    let mut cursor = cursor_over(vec![1, 2, 3, 9, 4]);
    let mut bounded = cursor.split(take_while(|x: &i32| *x < 5));
    assert_eq!(bounded.draw(), Some(1));
    let continuation = bounded.resume();
    assert_eq!(continuation.draw_all(), vec![2, 3, 9, 4]);
}

#[test]
fn test_zoom_splices_unconsumed_prefix() {
    let mut cursor = Cursor::new(from_iter(1..));
    let first = cursor.zoom(take(3), |view| view.draw());
    assert_eq!(first, Some(1));
    let next: Vec<_> = (0..4).map(|_| cursor.draw().unwrap()).collect();
    assert_eq!(next, vec![2, 3, 4, 5]);
}

#[test]
fn test_zoom_preserves_extra_pushback() {
    let mut cursor = cursor_over(vec![1, 2, 3, 4]);
    cursor.zoom(take(2), |view| {
        let a = view.draw().unwrap();
        let b = view.draw().unwrap();
        assert_eq!(view.draw(), None);
        view.undraw(b);
        view.undraw(a);
        view.undraw(0);
    });
    assert_eq!(cursor.draw_all(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_zoom_pushback_is_redrawn_inside_view() {
    let mut cursor = cursor_over(vec![1, 2, 3]);
    let drawn = cursor.zoom(take(2), |view| {
        let a = view.draw().unwrap();
        view.undraw(a);
        assert_eq!(view.peek(), Some(&1));
        view.draw_all()
    });
    assert_eq!(drawn, vec![1, 2]);
    assert_eq!(cursor.draw(), Some(3));
}

#[test]
fn test_view_peek_keeps_element_for_parent() {
    let mut cursor = cursor_over(vec![7, 8]);
    cursor.zoom(take(1), |view| {
        assert_eq!(view.peek(), Some(&7));
        assert_eq!(view.offset(), 0);
    });
    assert_eq!(cursor.draw(), Some(7));
}

#[test]
fn test_span_sequence_of_zooms() {
    let mut cursor = Cursor::new(from_iter(1..));
    assert_eq!(cursor.zoom(take_while(|x: &i32| *x >= 4), |v| v.draw()), None);
    assert_eq!(
        cursor.zoom(take_while(|x: &i32| *x < 4), |v| v.draw_all()),
        vec![1, 2, 3]
    );
    assert_eq!(cursor.zoom(take_while(|x: &i32| *x >= 4), |v| v.draw()), Some(4));
}

#[test]
fn test_nested_zoom_matches_combined_bound() {
    let mut nested = cursor_over((1..=10).collect());
    let inner = nested.zoom(take(5), |outer| {
        let inner = outer.zoom(take(2), |view| view.draw_all());
        assert_eq!(outer.draw(), Some(3));
        inner
    });
    assert_eq!(inner, vec![1, 2]);
    assert_eq!(nested.draw(), Some(4));

    let mut direct = cursor_over((1..=10).collect());
    assert_eq!(direct.zoom(take(2), |view| view.draw_all()), vec![1, 2]);
}

#[test]
fn test_nested_zoom_inner_bound_longer_than_outer() {
    let mut cursor = cursor_over((1..=10).collect());
    let drawn = cursor.zoom(take(3), |outer| outer.zoom(take(5), |inner| inner.draw_all()));
    assert_eq!(drawn, vec![1, 2, 3]);
    assert_eq!(cursor.draw(), Some(4));
}

#[test]
fn test_deeply_nested_pushback_reaches_root() {
    let mut cursor = cursor_over(vec![1, 2, 3, 4]);
    cursor.zoom(take(3), |a| {
        a.zoom(take(2), |b| {
            b.zoom(take(1), |c| {
                let x = c.draw().unwrap();
                c.undraw(x);
            });
            assert_eq!(b.draw(), Some(1));
        });
    });
    assert_eq!(cursor.draw_all(), vec![2, 3, 4]);
}

#[test]
fn test_zoom_everything_is_identity() {
    let mut zoomed = cursor_over(vec![1, 2, 3]);
    let a = zoomed.zoom(everything(), |view| {
        let x = view.draw();
        view.undraw(42);
        x
    });
    let mut direct = cursor_over(vec![1, 2, 3]);
    let b = direct.draw();
    direct.undraw(42);
    assert_eq!(a, b);
    assert_eq!(zoomed.draw_all(), direct.draw_all());
}

#[test]
fn test_view_as_producer_finishes_with_continuation() {
    let cursor = cursor_over(vec![1, 2, 3, 4]);
    let view = View::new(cursor, take(2));
    let (prefix, continuation) = view.collect_all();
    assert_eq!(prefix, vec![1, 2]);
    assert_eq!(continuation.collect_all(), (vec![3, 4], "end"));
}

#[test]
fn test_bound_rule_at_runtime() {
    let mut cursor = cursor_over(vec![1, 2, 3, 10, 11]);
    let rules = vec![
        BoundRule::Count(2),
        BoundRule::Predicate(|x: &i32| *x < 10),
        BoundRule::Unbounded,
    ];
    let parts: Vec<Vec<i32>> = rules
        .into_iter()
        .map(|rule| cursor.zoom(rule, |view| view.draw_all()))
        .collect();
    assert_eq!(parts, vec![vec![1, 2], vec![3], vec![10, 11]]);
}

#[test]
fn test_view_restart_continues_at_parent_position() {
    let mut cursor = Cursor::new(from_iter(vec![1, 1, 2, 2, 3]));
    let mut view = View::new(&mut cursor, take(2));
    assert_eq!(view.draw_all(), vec![1, 1]);
    *view.bound_mut() = take(2);
    view.restart();
    assert_eq!(view.draw_all(), vec![2, 2]);
    view.resume();
    assert_eq!(cursor.draw(), Some(3));
}

#[test]
fn test_bound_tracks_admitted_elements() {
    let mut cursor = cursor_over(vec![1, 2, 3, 4]);
    let mut bounded = cursor.split(take(3));
    assert_eq!(bounded.bound().remaining(), 3);
    assert_eq!(bounded.draw(), Some(1));
    assert_eq!(bounded.bound().remaining(), 2);
    let x = bounded.draw().unwrap();
    bounded.undraw(x);
    assert_eq!(bounded.bound().remaining(), 1);
    assert_eq!(bounded.draw_all(), vec![2, 3]);
    assert_eq!(bounded.bound().remaining(), 0);
    assert_eq!(bounded.resume().draw(), Some(4));
}
