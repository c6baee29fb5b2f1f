#![allow(dead_code)]

use todolists::aggregation::{is_list_complete, remaining_count, total_count};
use todolists::persistence::{DatabasePersistence, Persistence};

/// Fresh in-memory SQLite gateway with the schema created.
pub async fn memory_database() -> DatabasePersistence {
    DatabasePersistence::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open")
}

/// Create a list, add a todo, complete it, then delete the list.
pub async fn groceries_scenario(store: &dyn Persistence) {
    let id = store.create_list("Groceries").await.unwrap();

    let lists = store.all_lists().await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Groceries");
    assert_eq!(total_count(&lists[0]), 0);

    store.create_todo(id, "Milk").await.unwrap();
    let list = store.find_list(id).await.unwrap();
    assert_eq!(total_count(&list), 1);
    assert_eq!(remaining_count(&list), 1);
    assert!(!is_list_complete(&list));

    let milk = list.todos[0].id;
    store.set_todo_completed(id, milk, true).await.unwrap();
    let list = store.find_list(id).await.unwrap();
    assert_eq!(remaining_count(&list), 0);
    assert!(is_list_complete(&list));

    store.delete_list(id).await.unwrap();
    assert!(store.find_list(id).await.unwrap_err().is_not_found());
    assert!(store.all_lists().await.unwrap().is_empty());
}

/// `complete_all_todos` marks every todo and can be repeated.
pub async fn complete_all_scenario(store: &dyn Persistence) {
    let id = store.create_list("Chores").await.unwrap();
    for name in ["Dishes", "Laundry", "Vacuum"] {
        store.create_todo(id, name).await.unwrap();
    }
    store.set_todo_completed(id, 2, true).await.unwrap();
    assert_eq!(remaining_count(&store.find_list(id).await.unwrap()), 2);

    store.complete_all_todos(id).await.unwrap();
    let once = store.find_list(id).await.unwrap();
    assert_eq!(total_count(&once), 3);
    assert!(once.todos.iter().all(|todo| todo.completed));

    store.complete_all_todos(id).await.unwrap();
    assert_eq!(store.find_list(id).await.unwrap(), once);
}

/// Ids are allocated as max + 1 and deleted maxima are not skipped over.
pub async fn id_allocation_scenario(store: &dyn Persistence) {
    let first = store.create_list("One").await.unwrap();
    let second = store.create_list("Two").await.unwrap();
    let third = store.create_list("Three").await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    store.delete_list(second).await.unwrap();
    assert_eq!(store.create_list("Four").await.unwrap(), 4);

    store.create_todo(first, "a").await.unwrap();
    store.create_todo(first, "b").await.unwrap();
    store.create_todo(first, "c").await.unwrap();
    store.delete_todo(first, 2).await.unwrap();
    store.create_todo(first, "d").await.unwrap();

    let ids: Vec<i32> = store
        .find_list(first)
        .await
        .unwrap()
        .todos
        .iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);

    // Todo ids are scoped to their list
    store.create_todo(third, "x").await.unwrap();
    assert_eq!(store.find_list(third).await.unwrap().todos[0].id, 1);
}

/// Mutations aimed at missing lists or todos do nothing.
pub async fn missing_targets_scenario(store: &dyn Persistence) {
    let id = store.create_list("Only").await.unwrap();
    store.create_todo(id, "Keep").await.unwrap();
    let before = store.all_lists().await.unwrap();

    store.rename_list(99, "Ghost").await.unwrap();
    store.delete_list(99).await.unwrap();
    store.create_todo(99, "Ghost").await.unwrap();
    store.delete_todo(id, 99).await.unwrap();
    store.set_todo_completed(id, 99, true).await.unwrap();
    store.complete_all_todos(99).await.unwrap();

    assert_eq!(store.all_lists().await.unwrap(), before);
    assert!(store.find_list(99).await.unwrap_err().is_not_found());
}

/// The gateway stores whatever it is given; uniqueness is the caller's job.
pub async fn duplicate_names_scenario(store: &dyn Persistence) {
    store.create_list("Groceries").await.unwrap();
    store.create_list("Groceries").await.unwrap();

    let lists = store.all_lists().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert!(lists.iter().all(|list| list.name == "Groceries"));
    assert_ne!(lists[0].id, lists[1].id);
}

/// Renaming and todo deletion are visible through `all_lists`.
pub async fn rename_and_delete_todo_scenario(store: &dyn Persistence) {
    let work = store.create_list("Work").await.unwrap();
    let home = store.create_list("Home").await.unwrap();
    store.create_todo(work, "Report").await.unwrap();
    store.create_todo(work, "Email").await.unwrap();
    store.create_todo(home, "Garden").await.unwrap();

    store.rename_list(work, "Office").await.unwrap();
    store.delete_todo(work, 1).await.unwrap();
    store.set_todo_completed(home, 1, true).await.unwrap();
    store.set_todo_completed(home, 1, false).await.unwrap();

    let lists = store.all_lists().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Office");
    assert_eq!(lists[0].todos.len(), 1);
    assert_eq!(lists[0].todos[0].name, "Email");
    assert_eq!(lists[1].name, "Home");
    assert!(!lists[1].todos[0].completed);
}
