//! End-to-end browsing through the public event API.

use serde_json::json;
use zshelf::app::AppState;
use zshelf::domain::{FilterCriteria, GenreId, Selector};
use zshelf::{handle_event, Catalog, Event, Overlay, ThemeSetting};

/// 25 books by one author, 12 per page. Odd-numbered books are mysteries.
fn shelf() -> Catalog {
    let books: Vec<_> = (1..=25)
        .map(|n| {
            let genres = if n % 2 == 1 { vec!["mystery"] } else { vec!["poetry"] };
            json!({
                "id": format!("b{n:02}"),
                "title": format!("Book {n:02}"),
                "author": "jane",
                "image": format!("covers/{n:02}.jpg"),
                "description": format!("Description of book {n}."),
                "published": "1998-06-01T00:00:00.000Z",
                "genres": genres,
            })
        })
        .collect();

    let document = json!({
        "books_per_page": 12,
        "authors": { "jane": "Jane Doe" },
        "genres": { "mystery": "Mystery", "poetry": "Poetry", "fiction": "Fiction" },
        "books": books,
    });
    Catalog::from_json(&document.to_string()).unwrap()
}

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).unwrap().0
}

#[test]
fn first_page_then_show_more() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);

    let vm = state.compute_viewmodel(40, 80);
    assert_eq!(vm.display_items.len(), 12);
    assert_eq!(vm.display_items[0].title, "Book 01");
    assert_eq!(vm.show_more.remaining, 13);
    assert_eq!(vm.show_more.label, "Show more (13)");
    assert!(vm.show_more.enabled);

    assert!(send(&mut state, Event::ShowMore));
    let vm = state.compute_viewmodel(40, 80);
    let titles: Vec<_> = vm.display_items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles.first(), Some(&"Book 13"));
    assert_eq!(titles.last(), Some(&"Book 24"));
    assert_eq!(vm.show_more.remaining, 1);

    assert!(send(&mut state, Event::ShowMore));
    let vm = state.compute_viewmodel(40, 80);
    assert_eq!(vm.display_items.len(), 1);
    assert_eq!(vm.show_more.remaining, 0);
    assert!(!vm.show_more.enabled);

    assert!(!send(&mut state, Event::ShowMore));
    assert_eq!(state.cursor.page(), 3);
}

#[test]
fn genre_without_books_shows_empty_state() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);
    let criteria = FilterCriteria {
        genre: Selector::Only(GenreId::from("fiction")),
        ..FilterCriteria::all()
    };

    assert!(send(&mut state, Event::ApplyFilter(criteria)));
    let vm = state.compute_viewmodel(40, 80);

    assert!(vm.display_items.is_empty());
    assert_eq!(vm.show_more.remaining, 0);
    assert!(!vm.show_more.enabled);
    let empty = vm.empty_state.unwrap();
    assert_eq!(empty.message, "No results found");
}

#[test]
fn new_filter_resets_to_first_page() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);
    send(&mut state, Event::ShowMore);
    assert_eq!(state.cursor.page(), 2);

    let criteria = FilterCriteria {
        genre: Selector::Only(GenreId::from("mystery")),
        ..FilterCriteria::all()
    };
    send(&mut state, Event::ApplyFilter(criteria));

    assert_eq!(state.cursor.page(), 1);
    let vm = state.compute_viewmodel(40, 80);
    assert_eq!(vm.display_items.len(), 12);
    assert_eq!(vm.show_more.remaining, 1);
    assert!(vm.header.title.contains("Filtered (13 of 25)"));
}

#[test]
fn search_form_typing_and_submit() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);

    send(&mut state, Event::OpenSearch);
    assert_eq!(state.overlay, Overlay::Search);
    for c in "book 2".chars() {
        send(&mut state, Event::Char(c));
    }
    assert!(send(&mut state, Event::SubmitSearch));

    assert_eq!(state.overlay, Overlay::Browsing);
    // Book 20 through Book 25
    assert_eq!(state.matches.len(), 6);
    assert!(state.matches.iter().all(|b| b.title.starts_with("Book 2")));
}

#[test]
fn detail_shows_author_and_year_then_closes() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);

    assert!(send(&mut state, Event::SelectBook("b05".into())));
    assert_eq!(state.overlay, Overlay::Detail);

    let vm = state.compute_viewmodel(40, 80);
    match vm.overlay {
        Some(zshelf::ui::OverlayView::Detail(detail)) => {
            assert_eq!(detail.title, "Book 05");
            assert_eq!(detail.author_year_label, "Jane Doe (1998)");
            assert_eq!(detail.image_uri, "covers/05.jpg");
        }
        other => panic!("expected detail overlay, got {other:?}"),
    }

    assert!(send(&mut state, Event::CloseDetail));
    assert_eq!(state.selection, None);
    assert_eq!(state.overlay, Overlay::Browsing);
}

#[test]
fn unknown_book_is_ignored() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);
    assert!(!send(&mut state, Event::SelectBook("missing".into())));
    assert_eq!(state.overlay, Overlay::Browsing);
    assert_eq!(state.selection, None);
}

#[test]
fn settings_toggle_switches_palette() {
    let mut state = AppState::new(shelf(), ThemeSetting::Day);
    assert_eq!(state.compute_viewmodel(40, 80).colors, zshelf::ui::apply_theme(ThemeSetting::Day));

    send(&mut state, Event::OpenSettings);
    send(&mut state, Event::NextOption);
    assert!(send(&mut state, Event::SubmitSettings));

    let vm = state.compute_viewmodel(40, 80);
    assert_eq!(vm.colors.dark, zshelf::ui::Rgb(255, 255, 255));
    assert_eq!(vm.colors.light, zshelf::ui::Rgb(10, 10, 20));
    assert_eq!(state.theme.setting, ThemeSetting::Night);
}
