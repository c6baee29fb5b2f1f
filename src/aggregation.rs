//! Completion state and display ordering for lists and todos.

use crate::models::{List, Todo};

/// True when the list has at least one todo and every todo is completed.
pub fn is_list_complete(list: &List) -> bool {
    total_count(list) > 0 && remaining_count(list) == 0
}

/// Number of todos not yet completed.
pub fn remaining_count(list: &List) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// Number of todos in the list.
pub fn total_count(list: &List) -> usize {
    list.todos.len()
}

/// Orders lists with incomplete ones first, keeping each item's original index.
pub fn sort_lists(lists: &[List]) -> Vec<(&List, usize)> {
    partition_by(lists, is_list_complete)
}

/// Orders todos with incomplete ones first, keeping each item's original index.
pub fn sort_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    partition_by(todos, |todo| todo.completed)
}

/// Stable two-bucket partition: items failing `is_done` come first, then the rest,
/// each bucket in its original relative order.
fn partition_by<T, F>(items: &[T], is_done: F) -> Vec<(&T, usize)>
where
    F: Fn(&T) -> bool,
{
    let (done, pending): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, index))
        .partition(|&(item, _)| is_done(item));

    pending.into_iter().chain(done).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i32, completed: bool) -> Todo {
        Todo {
            id,
            name: format!("todo {id}"),
            completed,
        }
    }

    fn list(id: i32, todos: Vec<Todo>) -> List {
        List {
            id,
            name: format!("list {id}"),
            todos,
        }
    }

    #[test]
    fn test_empty_list_is_not_complete() {
        let empty = list(1, vec![]);
        assert!(!is_list_complete(&empty));
        assert_eq!(remaining_count(&empty), 0);
        assert_eq!(total_count(&empty), 0);
    }

    #[test]
    fn test_completion_counts() {
        let partial = list(1, vec![todo(1, true), todo(2, false), todo(3, false)]);
        assert!(!is_list_complete(&partial));
        assert_eq!(remaining_count(&partial), 2);
        assert_eq!(total_count(&partial), 3);

        let done = list(2, vec![todo(1, true), todo(2, true)]);
        assert!(is_list_complete(&done));
        assert_eq!(remaining_count(&done), 0);
    }

    #[test]
    fn test_sort_todos_is_stable_partition() {
        let todos = vec![todo(1, true), todo(2, false), todo(3, true), todo(4, false)];
        let sorted: Vec<(i32, usize)> = sort_todos(&todos).into_iter().map(|(t, i)| (t.id, i)).collect();
        assert_eq!(sorted, vec![(2, 1), (4, 3), (1, 0), (3, 2)]);
    }

    #[test]
    fn test_sort_lists_places_complete_last() {
        let lists = vec![
            list(1, vec![todo(1, true)]),
            list(2, vec![]),
            list(3, vec![todo(1, false)]),
            list(4, vec![todo(1, true), todo(2, true)]),
        ];
        let sorted: Vec<(i32, usize)> = sort_lists(&lists).into_iter().map(|(l, i)| (l.id, i)).collect();
        assert_eq!(sorted, vec![(2, 1), (3, 2), (1, 0), (4, 3)]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let todos = vec![todo(1, true), todo(2, false), todo(3, true), todo(4, false), todo(5, false)];
        let once: Vec<Todo> = sort_todos(&todos).into_iter().map(|(t, _)| t.clone()).collect();
        let twice: Vec<Todo> = sort_todos(&once).into_iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(once, twice);

        // Already-sorted input keeps its indices in order
        let indices: Vec<usize> = sort_todos(&once).into_iter().map(|(_, i)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_lists_is_idempotent() {
        let lists = vec![
            list(1, vec![todo(1, true)]),
            list(2, vec![]),
            list(3, vec![todo(1, true), todo(2, false)]),
            list(4, vec![todo(1, true), todo(2, true)]),
            list(5, vec![todo(1, false)]),
        ];
        let once: Vec<List> = sort_lists(&lists).into_iter().map(|(l, _)| l.clone()).collect();
        let twice: Vec<List> = sort_lists(&once).into_iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(once, twice);

        // The empty list counts as incomplete and stays ahead of the complete ones
        let ids: Vec<i32> = once.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 1, 4]);

        let indices: Vec<usize> = sort_lists(&once).into_iter().map(|(_, i)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_lists(&[]).is_empty());
        assert!(sort_todos(&[]).is_empty());
    }
}
