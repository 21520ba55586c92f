use crate::cli::{MoveArgs, ShowArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_client::TagBadge;
use taskboard_domain::{BoardFilters, Card, ComposedView, User, ViewComposer, ViewMode};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    board_id: &'a str,
    board_title: &'a str,
    card_count: usize,
    has_active_filters: bool,
    selected_user: Option<&'a User>,
    selected_tags: Vec<TagBadge>,
    view: ComposedView,
}

pub async fn handle_show(ctx: &CliContext, args: ShowArgs) -> anyhow::Result<()> {
    let filters = build_filters(&args);
    let mode = match args.view.as_deref() {
        Some(view) => view.parse::<ViewMode>()?,
        None => ctx.default_view()?,
    };

    let mut view = ViewComposer::new(mode).compose(&filters, ctx.snapshot.lists());
    if args.by_priority {
        view.sort_by_priority();
    }
    tracing::debug!(mode = ?view.mode(), cards = view.card_count(), "Composed board view");

    let selected_tags = filters
        .selected_tag_badges(&ctx.snapshot.tags)
        .into_iter()
        .map(TagBadge::from_tag)
        .collect();

    output::output_success(ShowOutput {
        board_id: &ctx.snapshot.board.id,
        board_title: &ctx.snapshot.board.title,
        card_count: view.card_count(),
        has_active_filters: filters.has_active_filters(),
        selected_user: filters.selected_user_badge(&ctx.snapshot.users),
        selected_tags,
        view,
    })
}

/// Each flag is applied the way the filter bar applies a click, so a tag
/// given twice toggles itself back off.
fn build_filters(args: &ShowArgs) -> BoardFilters {
    let mut filters = BoardFilters::new();
    if let Some(ref term) = args.search {
        filters.set_search_term(term.clone());
    }
    if let Some(ref user) = args.user {
        filters.set_selected_user(Some(user.clone()));
    }
    for tag in &args.tags {
        filters.toggle_tag(tag.clone());
    }
    filters
}

pub async fn handle_move(ctx: &mut CliContext, args: MoveArgs) -> anyhow::Result<()> {
    ctx.snapshot
        .board
        .move_card(&args.card_id, &args.list_id, args.position)?;
    ctx.save().await?;

    let card: Option<Card> = ctx.snapshot.find_card(&args.card_id).cloned();
    output::output_success(card)
}
