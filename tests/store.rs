#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use parking_lot::Mutex;
    use std::collections::HashSet;
    use std::time::Duration;
    use todos::api::TodoApi;
    use todos::libs::error::ErrorType;
    use todos::libs::store::{TodoStore, ERROR_CLEAR_DELAY};
    use todos::libs::todo::{Todo, TodoField, TodoFilter, PLACEHOLDER_ID};

    const USER_ID: u32 = 7;

    /// In-memory stand-in for the remote API with failure injection.
    #[derive(Default)]
    struct FakeApi {
        todos: Mutex<Vec<Todo>>,
        next_id: Mutex<u32>,
        fail_list: bool,
        fail_create: bool,
        /// Ids whose delete and update calls fail.
        failing: HashSet<u32>,
        /// Artificial latency of every mutating call.
        delay: Duration,
        creates: Mutex<usize>,
        updates: Mutex<usize>,
        deletes: Mutex<usize>,
    }

    impl FakeApi {
        fn with(todos: Vec<Todo>) -> Self {
            let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
            FakeApi {
                todos: Mutex::new(todos),
                next_id: Mutex::new(next_id),
                ..Default::default()
            }
        }

        fn failing(mut self, ids: &[u32]) -> Self {
            self.failing = ids.iter().copied().collect();
            self
        }

        fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        async fn latency(&self) {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }
    }

    impl TodoApi for FakeApi {
        async fn list(&self) -> Result<Vec<Todo>> {
            if self.fail_list {
                return Err(anyhow!("503 Service Unavailable"));
            }
            Ok(self.todos.lock().clone())
        }

        async fn create(&self, todo: &Todo) -> Result<Todo> {
            *self.creates.lock() += 1;
            self.latency().await;
            if self.fail_create {
                return Err(anyhow!("500 Internal Server Error"));
            }

            let mut next_id = self.next_id.lock();
            let created = Todo::new(*next_id, todo.user_id, &todo.title, todo.completed);
            *next_id += 1;
            self.todos.lock().push(created.clone());
            Ok(created)
        }

        async fn update(&self, todo: &Todo) -> Result<Todo> {
            *self.updates.lock() += 1;
            self.latency().await;
            if self.failing.contains(&todo.id) {
                return Err(anyhow!("500 Internal Server Error"));
            }

            let mut todos = self.todos.lock();
            let stored = todos.iter_mut().find(|stored| stored.id == todo.id).ok_or_else(|| anyhow!("404 Not Found"))?;
            *stored = todo.clone();
            Ok(todo.clone())
        }

        async fn delete(&self, id: u32) -> Result<()> {
            *self.deletes.lock() += 1;
            self.latency().await;
            if self.failing.contains(&id) {
                return Err(anyhow!("500 Internal Server Error"));
            }
            self.todos.lock().retain(|todo| todo.id != id);
            Ok(())
        }
    }

    fn todo(id: u32, completed: bool) -> Todo {
        Todo::new(id, USER_ID, &format!("task {}", id), completed)
    }

    async fn loaded(api: FakeApi) -> TodoStore<FakeApi> {
        let store = TodoStore::new(api, USER_ID);
        store.load().await;
        store
    }

    fn ids(store: &TodoStore<FakeApi>) -> Vec<u32> {
        store.snapshot().todos.iter().map(|todo| todo.id).collect()
    }

    fn completed(store: &TodoStore<FakeApi>) -> Vec<bool> {
        store.snapshot().todos.iter().map(|todo| todo.completed).collect()
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true), todo(3, false)])).await;

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.snapshot().items_left(), 2);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_filter_changes_visible_only() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true), todo(3, false)])).await;

        store.set_filter(TodoFilter::Completed);
        let state = store.snapshot();
        assert_eq!(state.visible(), vec![todo(2, true)]);
        assert_eq!(state.todos.len(), 3);

        store.set_filter(TodoFilter::All);
        assert_eq!(store.snapshot().visible(), store.snapshot().todos);
    }

    #[tokio::test]
    async fn test_add_blank_title_is_rejected() {
        let store = loaded(FakeApi::with(vec![])).await;

        assert!(store.add_todo("   ").await.is_none());
        assert_eq!(store.error(), Some(ErrorType::EmptyTitle));
        assert_eq!(*store.api().creates.lock(), 0);
        assert!(store.snapshot().todos.is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_server_task() {
        let store = loaded(FakeApi::with(vec![todo(1, false)])).await;

        let created = store.add_todo("  Buy milk ").await.unwrap();
        assert_ne!(created.id, PLACEHOLDER_ID);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.user_id, USER_ID);

        let state = store.snapshot();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[1], created);
        assert!(!state.is_creating());
        assert!(state.todos.iter().all(|todo| !todo.is_placeholder()));
    }

    #[tokio::test]
    async fn test_add_failure_clears_placeholder() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::with(vec![todo(1, false)])
        };
        let store = loaded(api).await;

        assert!(store.add_todo("Buy milk").await.is_none());
        let state = store.snapshot();
        assert_eq!(state.error, Some(ErrorType::UnableToAdd));
        assert!(!state.is_creating());
        assert_eq!(ids(&store), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_shows_placeholder_and_blocks_second_add() {
        let store = loaded(FakeApi::with(vec![]).delayed(Duration::from_millis(200))).await;

        let (first, second, during) = tokio::join!(store.add_todo("first"), store.add_todo("second"), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            store.snapshot()
        });

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(*store.api().creates.lock(), 1);
        assert_eq!(during.pending_create, Some(Todo::placeholder(USER_ID, "first")));
        assert!(during.todos.is_empty());
        assert_eq!(store.snapshot().pending_create, None);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_task() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true)])).await;

        store.delete_todo(1).await;
        assert_eq!(ids(&store), vec![2]);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_task() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true)]).failing(&[1])).await;

        store.delete_todo(1).await;
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.error(), Some(ErrorType::UnableToDelete));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_delete_is_not_pending() {
        let store = loaded(FakeApi::with(vec![todo(1, false)]).delayed(Duration::from_millis(50))).await;

        let (_, during) = tokio::join!(store.delete_todo(1), async { store.snapshot() });
        assert!(during.pending.is_empty());
        assert!(ids(&store).is_empty());
    }

    #[tokio::test]
    async fn test_update_todo_reports_failure() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, false)]).failing(&[2])).await;
        let before = store.snapshot().todos;

        let failed = store.update_todo(&before[1], TodoField::Title("renamed".to_string())).await;
        assert!(failed);
        assert_eq!(store.snapshot().todos, before);
        assert_eq!(store.error(), Some(ErrorType::UnableToUpdate));

        let failed = store.update_todo(&before[0], TodoField::Title("renamed".to_string())).await;
        assert!(!failed);
        assert_eq!(store.snapshot().todos[0].title, "renamed");
    }

    #[tokio::test]
    async fn test_toggle_todo() {
        let store = loaded(FakeApi::with(vec![todo(1, false)])).await;

        assert!(!store.toggle_todo(&todo(1, false)).await);
        assert_eq!(completed(&store), vec![true]);

        assert!(!store.toggle_todo(&todo(1, true)).await);
        assert_eq!(completed(&store), vec![false]);
    }

    #[tokio::test]
    async fn test_rename_unchanged_is_noop() {
        let store = loaded(FakeApi::with(vec![todo(1, false)])).await;

        assert!(!store.rename_todo(&todo(1, false), "  task 1 ").await);
        assert_eq!(*store.api().updates.lock(), 0);
    }

    #[tokio::test]
    async fn test_rename_trims_title() {
        let store = loaded(FakeApi::with(vec![todo(1, false)])).await;

        assert!(!store.rename_todo(&todo(1, false), "  walk the dog ").await);
        assert_eq!(store.snapshot().todos[0].title, "walk the dog");
    }

    #[tokio::test]
    async fn test_rename_to_empty_deletes() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, false)])).await;

        assert!(!store.rename_todo(&todo(1, false), "   ").await);
        assert_eq!(ids(&store), vec![2]);
        assert_eq!(*store.api().deletes.lock(), 1);
    }

    #[tokio::test]
    async fn test_rename_to_empty_reports_failed_delete() {
        let store = loaded(FakeApi::with(vec![todo(1, false)]).failing(&[1])).await;

        assert!(store.rename_todo(&todo(1, false), "").await);
        assert_eq!(ids(&store), vec![1]);
        assert_eq!(store.error(), Some(ErrorType::UnableToDelete));
    }

    #[tokio::test]
    async fn test_clear_completed() {
        let store = loaded(FakeApi::with(vec![todo(1, true), todo(2, false), todo(3, true)])).await;

        store.clear_completed().await;
        assert_eq!(store.snapshot().todos, vec![todo(2, false)]);
        assert!(store.snapshot().pending.is_empty());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_clear_completed_partial_failure() {
        let store = loaded(FakeApi::with(vec![todo(1, true), todo(2, false), todo(3, true)]).failing(&[3])).await;

        store.clear_completed().await;
        assert_eq!(ids(&store), vec![2, 3]);
        assert!(store.snapshot().pending.is_empty());
        assert_eq!(store.error(), Some(ErrorType::UnableToDelete));
    }

    #[tokio::test]
    async fn test_clear_completed_without_completed_tasks() {
        let store = loaded(FakeApi::with(vec![todo(1, false)])).await;

        store.clear_completed().await;
        assert_eq!(*store.api().deletes.lock(), 0);
        assert_eq!(ids(&store), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_completed_marks_pending() {
        let store = loaded(
            FakeApi::with(vec![todo(1, true), todo(2, false), todo(3, true)]).delayed(Duration::from_millis(100)),
        )
        .await;

        let (_, during) = tokio::join!(store.clear_completed(), async { store.snapshot() });
        assert!(during.is_pending(1));
        assert!(!during.is_pending(2));
        assert!(during.is_pending(3));
        assert!(store.snapshot().pending.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_deletes_settle_by_id() {
        let store = loaded(
            FakeApi::with(vec![todo(1, true), todo(2, false), todo(3, true)]).delayed(Duration::from_millis(100)),
        )
        .await;

        tokio::join!(store.clear_completed(), store.delete_todo(2));
        assert!(ids(&store).is_empty());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_toggle_all_round_trip() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true)])).await;

        store.toggle_all().await;
        assert_eq!(completed(&store), vec![true, true]);
        assert_eq!(*store.api().updates.lock(), 1);

        store.toggle_all().await;
        assert_eq!(completed(&store), vec![false, false]);
        assert_eq!(*store.api().updates.lock(), 3);
        assert!(store.snapshot().pending.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_all_partial_failure_applies_nothing() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, false), todo(3, true)]).failing(&[2])).await;

        store.toggle_all().await;
        assert_eq!(completed(&store), vec![false, false, true]);
        assert_eq!(store.error(), Some(ErrorType::UnableToUpdate));
        assert!(store.snapshot().pending.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_all_marks_active_targets_pending() {
        let store = loaded(FakeApi::with(vec![todo(1, false), todo(2, true)]).delayed(Duration::from_millis(100))).await;

        let (_, during) = tokio::join!(store.toggle_all(), async { store.snapshot() });
        assert!(during.is_pending(1));
        assert!(!during.is_pending(2));
        assert!(store.snapshot().pending.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_all_marks_every_task_pending_when_all_completed() {
        let store = loaded(FakeApi::with(vec![todo(1, true), todo(2, true)]).delayed(Duration::from_millis(100))).await;

        let (_, during) = tokio::join!(store.toggle_all(), async { store.snapshot() });
        assert!(during.is_pending(1));
        assert!(during.is_pending(2));
        assert_eq!(completed(&store), vec![false, false]);
        assert!(store.snapshot().pending.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_all_on_empty_list() {
        let store = loaded(FakeApi::with(vec![])).await;

        store.toggle_all().await;
        assert_eq!(*store.api().updates.lock(), 0);
        assert!(store.snapshot().todos.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_clears_after_delay() {
        let store = loaded(FakeApi::with(vec![])).await;

        store.add_todo("").await;
        tokio::time::sleep(ERROR_CLEAR_DELAY - Duration::from_millis(1)).await;
        assert_eq!(store.error(), Some(ErrorType::EmptyTitle));

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_error_rearms_timer() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::with(vec![])
        };
        let store = loaded(api).await;

        store.add_todo(" ").await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        store.add_todo("Buy milk").await;
        assert_eq!(store.error(), Some(ErrorType::UnableToAdd));

        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.error(), Some(ErrorType::UnableToAdd));

        tokio::time::sleep(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_error_is_sticky() {
        let api = FakeApi {
            fail_list: true,
            ..FakeApi::with(vec![todo(1, false)])
        };
        let store = loaded(api).await;

        assert!(store.snapshot().todos.is_empty());
        tokio::time::sleep(ERROR_CLEAR_DELAY * 3).await;
        tokio::task::yield_now().await;
        assert_eq!(store.error(), Some(ErrorType::UnableToLoad));

        store.dismiss_error();
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_error() {
        let store = loaded(FakeApi::with(vec![])).await;

        store.add_todo("").await;
        store.dismiss_error();
        assert_eq!(store.error(), None);

        tokio::time::sleep(ERROR_CLEAR_DELAY * 2).await;
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_cancels_armed_timer() {
        let api = FakeApi {
            fail_list: true,
            ..FakeApi::with(vec![todo(1, false)])
        };
        let store = TodoStore::new(api, USER_ID);

        store.add_todo(" ").await;
        assert_eq!(store.error(), Some(ErrorType::EmptyTitle));
        tokio::time::sleep(Duration::from_secs(1)).await;

        store.load().await;
        tokio::time::sleep(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.error(), Some(ErrorType::UnableToLoad));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_error_timer() {
        let metrics = tokio::runtime::Handle::current().metrics();
        let store = loaded(FakeApi::with(vec![])).await;
        let before = metrics.num_alive_tasks();

        store.add_todo("").await;
        assert_eq!(metrics.num_alive_tasks(), before + 1);

        drop(store);
        for _ in 0..10 {
            if metrics.num_alive_tasks() == before {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(metrics.num_alive_tasks(), before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_errors_still_clear() {
        let store = loaded(FakeApi::with(vec![])).await;
        let runtime = tokio::runtime::Handle::current();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    runtime.block_on(async {
                        for _ in 0..50 {
                            store.add_todo(" ").await;
                        }
                    })
                });
            }
        });
        assert_eq!(store.error(), Some(ErrorType::EmptyTitle));

        tokio::time::sleep(ERROR_CLEAR_DELAY + Duration::from_millis(500)).await;
        assert_eq!(store.error(), None);
    }
}
