use contracts::domain::common::Entity;
use contracts::shared::crud::{Cell, Tone};
use contracts::shared::number_format::format_currency;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

use super::view_model::CrudViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;

fn badge_color(tone: Tone) -> BadgeColor {
    match tone {
        Tone::Neutral => BadgeColor::Subtle,
        Tone::Info => BadgeColor::Brand,
        Tone::Success => BadgeColor::Success,
        Tone::Danger => BadgeColor::Danger,
    }
}

/// One cell; text is highlighted against the search term
fn render_cell(cell: Cell, term: &str) -> AnyView {
    match cell {
        Cell::Text(text) => highlight_matches(&text, term),
        Cell::Titled { title, subtitle } => view! {
            <div class="cell-titled">
                <div class="cell-titled__title">{highlight_matches(&title, term)}</div>
                <div class="cell-titled__subtitle">{subtitle}</div>
            </div>
        }
        .into_any(),
        Cell::Money(value) => view! {
            <span class="cell-money">{format_currency(value)}</span>
        }
        .into_any(),
        Cell::Date(text) => view! {
            <span class="cell-date">{icon("calendar")}{text}</span>
        }
        .into_any(),
        Cell::Badges(badges) => view! {
            <div class="cell-badges">
                {badges.into_iter().map(|(text, tone)| view! {
                    <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
                        {text}
                    </Badge>
                }).collect_view()}
            </div>
        }
        .into_any(),
        Cell::Lines(lines) => view! {
            <div class="cell-lines">
                {lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Table of the visible items with per-row actions
#[component]
pub fn CrudTable<E: Entity>(
    vm: CrudViewModel<E>,
    /// Extra buttons rendered before edit/delete
    #[prop(optional_no_strip)]
    row_actions: Option<Callback<E, AnyView>>,
) -> impl IntoView {
    let messages = E::messages();

    let element = E::metadata().ui.element_name;

    // Only what the rows show; draft edits in the modal do not rebuild the table
    let listing = Memo::new(move |_| {
        vm.state.with(|s| {
            let visible: Vec<E> = s.visible_items().into_iter().cloned().collect();
            (visible, s.related.clone(), s.search_term.clone())
        })
    });

    let rows = move || {
        listing.with(|(visible, related, term)| {
            visible
                .iter()
                .map(|item| {
                    let cells = item.cells(related);
                    let for_edit = item.clone();
                    let for_delete = item.clone();
                    let extra = row_actions.map(|render| render.run(item.clone()));
                    let term = term.clone();
                    view! {
                        <TableRow>
                            {cells.into_iter().map(|cell| {
                                let term = term.clone();
                                view! {
                                    <TableCell>
                                        <TableCellLayout>{render_cell(cell, &term)}</TableCellLayout>
                                    </TableCell>
                                }
                            }).collect_view()}
                            <TableCell>
                                <TableCellLayout>
                                    <div class="row-actions">
                                        {extra}
                                        {E::supports_update().then(|| view! {
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                title=format!("Edit {}", element)
                                                on_click=Callback::new(move |_| vm.open_edit(for_edit.clone()))
                                            >
                                                {icon("edit")}
                                            </Button>
                                        })}
                                        <Button
                                            variant="ghost"
                                            size="sm"
                                            class="row-actions__delete"
                                            title=format!("Delete {}", element)
                                            on_click=Callback::new(move |_| vm.remove(&for_delete))
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </div>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    let is_empty = move || listing.with(|(visible, _, _)| visible.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=move || view! {
                <div class="zero-state">
                    <p>{messages.empty_list}</p>
                </div>
            }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        {E::columns().iter().map(|column| view! {
                            <TableHeaderCell>{*column}</TableHeaderCell>
                        }).collect_view()}
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows}
                </TableBody>
            </Table>
        </Show>
    }
}
