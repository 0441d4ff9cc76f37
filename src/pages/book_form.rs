//! Add and edit forms for an owner's listing.
//!
//! DESIGN
//! ======
//! Both routes share one form component. Editing reads the listing from the
//! app-wide `MyBooks` cache (loading it when the visitor lands on the edit
//! URL directly), so only the owner's own listings can be opened.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::ApiClient;
use crate::net::types::{BOOK_SUBJECTS, Book, BookFields};
use crate::pages::dashboard::install_my_books_loader;
use crate::state::dashboard::MyBooks;
use crate::state::notice::NoticeState;
use crate::state::session::{Session, SessionContext};
use crate::util::route::DASHBOARD_PATH;

/// Blank form for a new listing; the contact email defaults to the owner's.
#[must_use]
pub fn new_book_fields(session: Option<&Session>) -> BookFields {
    BookFields {
        contact_email: session.map(|s| s.email.clone()).unwrap_or_default(),
        owner_id: session.map(|s| s.id),
        ..BookFields::default()
    }
}

/// Subject choices, keeping a legacy value that is not in the fixed list.
#[must_use]
pub fn subject_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = BOOK_SUBJECTS.iter().map(|s| (*s).to_owned()).collect();
    if !current.is_empty() && !BOOK_SUBJECTS.contains(&current) {
        options.insert(0, current.to_owned());
    }
    options
}

/// Copy confirmed edits onto the cached listing.
pub fn apply_edit(book: &mut Book, fields: &BookFields) {
    book.title.clone_from(&fields.title);
    book.author.clone_from(&fields.author);
    book.subject.clone_from(&fields.subject);
    book.description.clone_from(&fields.description);
    book.contact_email.clone_from(&fields.contact_email);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    Add,
    Edit(i64),
}

#[component]
pub fn AddBookPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let fields = RwSignal::new(new_book_fields(session.session().as_ref()));
    view! { <BookForm mode=FormMode::Add fields=fields/> }
}

#[component]
pub fn EditBookPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let my_books = expect_context::<RwSignal<MyBooks>>();
    let params = use_params_map();

    let id = params.get_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let failed_epoch = install_my_books_loader(api, session, my_books, notices);

    let fields = RwSignal::new(BookFields::default());
    let prefilled = StoredValue::new(false);
    let found = move || id.and_then(|id| my_books.with(|l| l.items.iter().find(|b| b.id == id).cloned()));
    let settled = move || my_books.with(|l| l.loaded) || failed_epoch.get() == Some(session.epoch());

    Effect::new(move || {
        if prefilled.get_value() {
            return;
        }
        if let Some(book) = found() {
            fields.set(BookFields::from_book(&book));
            prefilled.set_value(true);
        }
    });

    view! {
        <Show when=move || settled() || id.is_none() fallback=|| view! { <div class="spinner"></div> }>
            {move || match id.filter(|_| found().is_some()) {
                Some(id) => view! { <BookForm mode=FormMode::Edit(id) fields=fields/> }.into_any(),
                None => {
                    view! {
                        <div class="empty-state">
                            <h3>"Book not found"</h3>
                            <p>"This listing does not exist or is not yours to edit."</p>
                            <a href=DASHBOARD_PATH class="button">
                                "Back to dashboard"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn BookForm(mode: FormMode, fields: RwSignal<BookFields>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let my_books = expect_context::<RwSignal<MyBooks>>();
    let navigate = use_navigate();

    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let valid = match fields.with(BookFields::validated) {
            Ok(valid) => valid,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let result = match mode {
                FormMode::Add => api.create_book(&valid).await,
                FormMode::Edit(id) => api.update_book(id, &valid).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    let title = &valid.title;
                    match mode {
                        FormMode::Add => {
                            my_books.update(MyBooks::invalidate);
                            notices.update(|n| {
                                n.success("Success", format!("\"{title}\" has been added successfully!"));
                            });
                        }
                        FormMode::Edit(id) => {
                            my_books.update(|l| {
                                l.update(|b| b.id == id, |b| apply_edit(b, &valid));
                            });
                            notices.update(|n| {
                                n.success("Book updated", format!("\"{title}\" has been updated."));
                            });
                        }
                    }
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("saving book failed: {err}");
                    let fallback = match mode {
                        FormMode::Add => "Failed to add book. Please try again.",
                        FormMode::Edit(_) => "Failed to update book. Please try again.",
                    };
                    notices.update(|n| {
                        n.report(&err, fallback);
                    });
                }
            }
        });
    };

    let (heading, submit_label) = match mode {
        FormMode::Add => ("Add a New Book", "Add Book"),
        FormMode::Edit(_) => ("Edit Book", "Save Changes"),
    };

    view! {
        <div class="book-form-page">
            <h1>{heading}</h1>
            <form class="book-form" on:submit=on_submit>
                <label class="book-form__label" for="book-title">
                    "Title"
                </label>
                <input
                    id="book-title"
                    class="book-form__input"
                    type="text"
                    placeholder="Enter the book title"
                    prop:value=move || fields.with(|f| f.title.clone())
                    on:input=move |ev| fields.update(|f| f.title = event_target_value(&ev))
                />
                <label class="book-form__label" for="book-author">
                    "Author"
                </label>
                <input
                    id="book-author"
                    class="book-form__input"
                    type="text"
                    placeholder="Enter the author's name"
                    prop:value=move || fields.with(|f| f.author.clone())
                    on:input=move |ev| fields.update(|f| f.author = event_target_value(&ev))
                />
                <label class="book-form__label" for="book-subject">
                    "Subject"
                </label>
                <select
                    id="book-subject"
                    class="book-form__input"
                    prop:value=move || fields.with(|f| f.subject.clone())
                    on:change=move |ev| fields.update(|f| f.subject = event_target_value(&ev))
                >
                    <option value="">"Select a subject"</option>
                    {move || {
                        subject_options(&fields.with(|f| f.subject.clone()))
                            .into_iter()
                            .map(|subject| {
                                let label = subject.clone();
                                view! { <option value=subject>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <label class="book-form__label" for="book-description">
                    "Description"
                </label>
                <textarea
                    id="book-description"
                    class="book-form__input book-form__input--multiline"
                    placeholder="Condition, edition, anything a borrower should know"
                    prop:value=move || fields.with(|f| f.description.clone().unwrap_or_default())
                    on:input=move |ev| fields.update(|f| f.description = Some(event_target_value(&ev)))
                ></textarea>
                <label class="book-form__label" for="book-contact">
                    "Contact email"
                </label>
                <input
                    id="book-contact"
                    class="book-form__input"
                    type="email"
                    placeholder="Where borrowers can reach you"
                    prop:value=move || fields.with(|f| f.contact_email.clone())
                    on:input=move |ev| fields.update(|f| f.contact_email = event_target_value(&ev))
                />
                <Show when=move || !info.get().is_empty()>
                    <p class="book-form__message">{move || info.get()}</p>
                </Show>
                <div class="book-form__actions">
                    <a href=DASHBOARD_PATH class="button">
                        "Cancel"
                    </a>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}
