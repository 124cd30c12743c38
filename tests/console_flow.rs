//! End-to-end workflows of the console against a scripted store.

mod common;

use common::{record, row, rows, store_error, Call, ScriptedStore};
use staffdesk::app::{DialogMode, NoticeKind, SearchPanel};
use staffdesk::domain::{Criteria, FieldEdit, StatusFilter};
use staffdesk::{Console, Event, Locale};
use std::time::Duration;
use tokio::time::{sleep, Instant};

fn console(store: &ScriptedStore) -> Console {
    Console::new(store.shared(), Locale::En)
}

fn it_department() -> Criteria {
    Criteria::neutral().with_department("D002")
}

fn notice(console: &Console) -> (NoticeKind, String) {
    let notice = console.notice().expect("a notice is showing");
    (notice.kind, notice.message.clone())
}

#[tokio::test(start_paused = true)]
async fn department_search_replaces_rows_and_memo() {
    let store = ScriptedStore::new();
    store.push_search(Ok(vec![row("E1", "D002"), row("E2", "D002")]));
    let mut console = console(&store);

    assert!(console.handle(Event::Search(it_department())).await);

    let ids: Vec<&str> = console.list().rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["E1", "E2"]);
    assert_eq!(console.list().memo(), Some(&it_department()));
    assert_eq!(store.calls(), [Call::Search(it_department())]);
    assert!(console.notice().is_none());
}

#[tokio::test(start_paused = true)]
async fn deleting_nothing_warns_without_calling_the_store() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1", "E2"])));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    assert!(console.handle(Event::DeleteSelected).await);

    assert_eq!(store.calls().len(), 1);
    assert_eq!(console.list().rows().len(), 2);
    assert_eq!(
        notice(&console),
        (NoticeKind::Warning, "Please select items to delete".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn confirmed_create_researches_the_memo_and_closes() {
    let store = ScriptedStore::new();
    store.push_search(Ok(vec![row("E1", "D002")]));
    store.push_search(Ok(vec![row("E1", "D002"), row("E100", "D002")]));
    let mut console = console(&store);
    console.handle(Event::Search(it_department())).await;

    assert!(console.handle(Event::NewRecord).await);
    assert!(console.handle(Event::EditField(FieldEdit::Id("E100".into()))).await);
    assert!(console.handle(Event::EditField(FieldEdit::Name("Grace".into()))).await);
    assert!(console.handle(Event::ConfirmDialog).await);

    let calls = store.calls();
    assert_eq!(calls.len(), 3);
    match &calls[1] {
        Call::Create(created) => {
            assert_eq!(created.id, "E100");
            assert_eq!(created.name, "Grace");
        }
        other => panic!("expected a create, got {other:?}"),
    }
    assert_eq!(calls[2], Call::Search(it_department()));
    assert!(console.dialog().is_closed());
    assert_eq!(console.list().rows().len(), 2);
    assert_eq!(notice(&console), (NoticeKind::Success, "Insert successful".into()));
}

#[tokio::test(start_paused = true)]
async fn failed_edit_fetch_never_opens_the_dialog() {
    let store = ScriptedStore::new();
    store.push_detail(Err(store_error("record locked")));
    let mut console = console(&store);

    console
        .handle(Event::OpenRow {
            mode: DialogMode::Edit,
            id: "E200".into(),
        })
        .await;

    assert!(console.dialog().is_closed());
    assert_eq!(store.calls(), [Call::Detail("E200".into())]);
    assert_eq!(notice(&console), (NoticeKind::Error, "record locked".into()));
}

#[tokio::test(start_paused = true)]
async fn clearing_matches_a_fresh_neutral_search() {
    let fresh_store = ScriptedStore::new();
    fresh_store.push_search(Ok(rows(&["E1", "E2", "E3"])));
    let mut fresh = console(&fresh_store);
    fresh.handle(Event::Search(Criteria::neutral())).await;

    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E2"])));
    store.push_search(Ok(Vec::new()));
    store.push_search(Ok(rows(&["E1", "E2", "E3"])));
    let mut console = console(&store);
    let mut panel = SearchPanel::new();

    panel.set_keyword("E2");
    console.handle(Event::from(panel.submit())).await;
    panel.set_status(Some(StatusFilter::Off));
    console.handle(Event::from(panel.submit())).await;
    console.handle(Event::from(panel.clear())).await;

    assert_eq!(console.list().rows(), fresh.list().rows());
    assert_eq!(store.calls().last(), fresh_store.calls().last());
    assert_eq!(console.list().memo(), Some(&Criteria::neutral()));
}

#[tokio::test(start_paused = true)]
async fn update_keeps_the_fetched_id_and_reissues_the_memo() {
    let store = ScriptedStore::new();
    let criteria = Criteria::neutral().with_keyword("E7");
    store.push_search(Ok(rows(&["E7"])));
    store.push_detail(Ok(record("E7")));
    store.push_search(Ok(rows(&["E7"])));
    let mut console = console(&store);
    console.handle(Event::Search(criteria.clone())).await;

    console
        .handle(Event::OpenRow {
            mode: DialogMode::Edit,
            id: "E7".into(),
        })
        .await;
    assert_eq!(notice(&console), (NoticeKind::Success, "Detail Loaded Success".into()));

    assert!(!console.handle(Event::EditField(FieldEdit::Id("E8".into()))).await);
    assert!(console.handle(Event::EditField(FieldEdit::Email("e7@corp.test".into()))).await);
    assert!(console.handle(Event::ConfirmDialog).await);

    let calls = store.calls();
    match &calls[2] {
        Call::Update(updated) => {
            assert_eq!(updated.id, "E7");
            assert_eq!(updated.email, "e7@corp.test");
        }
        other => panic!("expected an update, got {other:?}"),
    }
    assert_eq!(calls[3], Call::Search(criteria));
    assert_eq!(console.list().rows(), rows(&["E7"]).as_slice());
    assert_eq!(notice(&console), (NoticeKind::Success, "Update successful".into()));
}

#[tokio::test(start_paused = true)]
async fn malformed_phone_edits_are_ignored() {
    let store = ScriptedStore::new();
    let mut console = console(&store);
    console.handle(Event::NewRecord).await;

    assert!(console.handle(Event::EditField(FieldEdit::Phone("0912".into()))).await);
    for bad in ["09-12", "phone", "09123456789"] {
        assert!(!console.handle(Event::EditField(FieldEdit::Phone(bad.into()))).await);
    }

    assert_eq!(console.dialog().payload().map(|p| p.phone.as_str()), Some("0912"));
}

#[tokio::test(start_paused = true)]
async fn failed_create_keeps_the_edited_payload() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1"])));
    store.push_write(Err(store_error("duplicate id")));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    console.handle(Event::NewRecord).await;
    console.handle(Event::EditField(FieldEdit::Id("E1".into()))).await;
    console.handle(Event::EditField(FieldEdit::Name("Ada".into()))).await;
    assert!(console.handle(Event::ConfirmDialog).await);

    assert!(console.dialog().is_open());
    let payload = console.dialog().payload().expect("dialog keeps its payload");
    assert_eq!((payload.id.as_str(), payload.name.as_str()), ("E1", "Ada"));
    assert_eq!(store.calls().len(), 2, "no re-search after a failed create");
    assert_eq!(notice(&console), (NoticeKind::Error, "duplicate id".into()));
}

#[tokio::test(start_paused = true)]
async fn instant_calls_keep_the_indicator_up_for_the_floor() {
    let store = ScriptedStore::new();
    let mut console = console(&store);
    let gate = console.gate().clone();
    let started = Instant::now();

    let probe = async {
        sleep(Duration::from_millis(450)).await;
        gate.is_busy()
    };
    let (_, busy_mid_floor) = tokio::join!(console.handle(Event::Search(Criteria::neutral())), probe);

    assert!(busy_mid_floor);
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(!console.gate().is_busy());
}

#[tokio::test(start_paused = true)]
async fn slow_calls_clear_the_indicator_when_they_resolve() {
    let store = ScriptedStore::with_latency(Duration::from_millis(800));
    let mut console = console(&store);
    let gate = console.gate().clone();
    let started = Instant::now();

    let probe = async {
        sleep(Duration::from_millis(700)).await;
        gate.is_busy()
    };
    let (_, busy_after_floor) =
        tokio::join!(console.handle(Event::Search(Criteria::neutral())), probe);

    assert!(busy_after_floor);
    assert!(started.elapsed() >= Duration::from_millis(800));
    assert!(!console.gate().is_busy());
}

#[tokio::test(start_paused = true)]
async fn batch_delete_sends_selection_and_clears_it() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1", "E2", "E3"])));
    store.push_search(Ok(rows(&["E3"])));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    console
        .handle(Event::SelectRows(vec!["E2".into(), "E1".into(), "E9".into()]))
        .await;
    assert_eq!(console.list().selection().len(), 2);

    assert!(console.handle(Event::DeleteSelected).await);

    let calls = store.calls();
    assert_eq!(calls[1], Call::Delete(vec!["E1".into(), "E2".into()]));
    assert_eq!(calls[2], Call::Search(Criteria::neutral()));
    assert!(console.list().selection().is_empty());
    assert_eq!(notice(&console), (NoticeKind::Success, "Delete successful".into()));
}

#[tokio::test(start_paused = true)]
async fn new_rows_prune_the_selection() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1", "E2", "E3"])));
    store.push_search(Ok(rows(&["E1", "E2"])));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;
    console.handle(Event::ToggleRow("E1".into())).await;
    console.handle(Event::ToggleRow("E3".into())).await;

    console.handle(Event::Search(Criteria::neutral())).await;

    assert!(console.list().is_selected("E1"));
    assert!(!console.list().is_selected("E3"));
    assert_eq!(console.list().selection().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_search_empties_rows_but_records_the_memo() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1"])));
    store.push_search(Err(staffdesk::ConsoleError::Store {
        status: 502,
        message: None,
    }));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    console.handle(Event::Search(it_department())).await;

    assert!(console.list().rows().is_empty());
    assert_eq!(console.list().memo(), Some(&it_department()));
    assert_eq!(notice(&console), (NoticeKind::Error, "An error occurred".into()));
}

#[tokio::test(start_paused = true)]
async fn failed_refresh_after_create_replaces_the_success_notice() {
    let store = ScriptedStore::new();
    store.push_search(Ok(rows(&["E1"])));
    store.push_search(Err(store_error("search unavailable")));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    console.handle(Event::NewRecord).await;
    console.handle(Event::EditField(FieldEdit::Id("E2".into()))).await;
    console.handle(Event::ConfirmDialog).await;

    assert!(console.dialog().is_closed());
    assert!(console.list().rows().is_empty());
    assert_eq!(notice(&console), (NoticeKind::Error, "search unavailable".into()));
}

#[tokio::test(start_paused = true)]
async fn create_without_prior_search_skips_the_refresh() {
    let store = ScriptedStore::new();
    let mut console = console(&store);

    console.handle(Event::NewRecord).await;
    console.handle(Event::EditField(FieldEdit::Id("E5".into()))).await;
    console.handle(Event::ConfirmDialog).await;

    assert_eq!(store.calls().len(), 1);
    assert!(console.dialog().is_closed());
}

#[tokio::test(start_paused = true)]
async fn detail_dialog_is_read_only() {
    let store = ScriptedStore::new();
    store.push_detail(Ok(record("E3")));
    let mut console = console(&store);

    console
        .handle(Event::OpenRow {
            mode: DialogMode::Detail,
            id: "E3".into(),
        })
        .await;

    assert!(console.dialog().is_open());
    assert!(!console.handle(Event::EditField(FieldEdit::Name("X".into()))).await);
    assert!(!console.handle(Event::ConfirmDialog).await);
    assert_eq!(store.calls().len(), 1);

    let view = console.view();
    let dialog = view.dialog.expect("dialog is rendered");
    assert_eq!(dialog.title, "Detail");
    assert!(dialog.confirm.is_none());

    assert!(console.handle(Event::CancelDialog).await);
    assert!(console.view().dialog.is_none());
}

#[tokio::test(start_paused = true)]
async fn row_open_settles_before_the_next_event() {
    let store = ScriptedStore::with_latency(Duration::from_millis(800));
    store.push_detail(Ok(record("E1")));
    let mut console = console(&store);

    console
        .handle(Event::OpenRow {
            mode: DialogMode::Edit,
            id: "E1".into(),
        })
        .await;
    assert_eq!(console.dialog().payload().map(|p| p.id.as_str()), Some("E1"));

    let reopened = console
        .handle(Event::OpenRow {
            mode: DialogMode::Detail,
            id: "E2".into(),
        })
        .await;

    assert!(!reopened);
    assert_eq!(console.dialog().mode(), Some(DialogMode::Edit));
    assert_eq!(store.calls(), [Call::Detail("E1".into())]);

    assert!(console.handle(Event::CancelDialog).await);
    assert!(console.dialog().is_closed());
}

#[tokio::test(start_paused = true)]
async fn locale_switch_reaches_store_and_view() {
    let store = ScriptedStore::new();
    let mut console = Console::new(store.shared(), Locale::Zh);
    console.handle(Event::Search(Criteria::neutral())).await;

    assert!(console.handle(Event::ChangeLocale(Locale::En)).await);
    console.handle(Event::Search(Criteria::neutral())).await;

    assert_eq!(store.locales(), [Locale::Zh, Locale::En]);
    let view = console.view();
    assert_eq!(view.header.locale, "en");
    assert_eq!(view.columns[0], "Id");
    assert_eq!(view.empty_state.as_deref(), Some("No rows"));
}

#[tokio::test(start_paused = true)]
async fn notices_expire_after_their_lifetime() {
    let store = ScriptedStore::new();
    let mut console = console(&store).with_notification_ttl(Duration::from_millis(3000));
    console.handle(Event::DeleteSelected).await;
    assert!(console.notice().is_some());

    sleep(Duration::from_millis(2999)).await;
    assert!(!console.tick());
    sleep(Duration::from_millis(1)).await;
    assert!(console.tick());
    assert!(console.notice().is_none());
}

#[tokio::test(start_paused = true)]
async fn pagination_walks_the_row_set() {
    let store = ScriptedStore::new();
    let ids: Vec<String> = (1..=12).map(|n| format!("E{n:02}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    store.push_search(Ok(rows(&id_refs)));
    store.push_search(Ok(rows(&id_refs)));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;

    let view = console.view();
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.footer.range, "1–5 of 12");
    assert_eq!(view.footer.page_count, 3);

    assert!(console.handle(Event::ShowPage(2)).await);
    let view = console.view();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].id, "E11");
    assert!(!console.handle(Event::ShowPage(3)).await);

    assert!(console.handle(Event::SetPageSize(10)).await);
    assert_eq!(console.view().rows.len(), 10);

    console.handle(Event::ShowPage(1)).await;
    console.handle(Event::Search(Criteria::neutral())).await;
    assert_eq!(console.pager().page(), 0);
}

#[tokio::test(start_paused = true)]
async fn rendered_view_shows_rows_and_footer() {
    let store = ScriptedStore::new();
    store.push_search(Ok(vec![row("E1", "D002")]));
    let mut console = console(&store);
    console.handle(Event::Search(Criteria::neutral())).await;
    console.handle(Event::ToggleRow("E1".into())).await;

    let text = staffdesk::ui::render(&console.view(), &staffdesk::Theme::plain());

    assert!(text.contains("Employee Console"));
    assert!(text.contains("E1"));
    assert!(text.contains("IT"));
    assert!(text.contains("1 selected"));
}
