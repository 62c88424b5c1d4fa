use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::{AppResult, RenderHtml};
use crate::filters;
use crate::services::date_range::DateWindow;
use crate::services::layout::{AxisTick, ChartLayout, LayoutConfig, TeamColumn};
use crate::state::AppState;
use crate::VERSION;

#[derive(Template)]
#[template(path = "pages/chart.html")]
pub struct ChartTemplate {
    pub title: String,
    pub version: &'static str,
    pub total_height_px: i64,
    pub axis: Vec<AxisTick>,
    pub columns: Vec<TeamColumnView>,
}

pub struct TeamColumnView {
    pub name: String,
    pub download_url: Option<String>,
    pub blocks: Vec<BlockView>,
}

pub struct BlockView {
    pub top_px: i64,
    pub height_px: i64,
    pub is_most_recent: bool,
    pub label: String,
    pub href: String,
    pub title: String,
}

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let data = state.load_chart_data()?;
    let window = DateWindow::resolve(&data);
    let layout = ChartLayout::compute(&data, window, &LayoutConfig::default());

    let columns = layout
        .columns
        .iter()
        .map(|column| column_view(&state, column))
        .collect();

    let template = ChartTemplate {
        title: "Payment Chart".into(),
        version: VERSION,
        total_height_px: layout.total_height_px,
        axis: layout.axis,
        columns,
    };

    template.render_html()
}

fn column_view(state: &AppState, column: &TeamColumn) -> TeamColumnView {
    let download_url = state
        .config
        .is_downloadable(&column.name)
        .then(|| format!("/downloads/{}", urlencoding::encode(&column.name)));

    let blocks = column
        .blocks
        .iter()
        .map(|block| BlockView {
            top_px: block.top_px,
            height_px: block.height_px,
            is_most_recent: block.is_most_recent,
            label: filters::format_day_label(block.start),
            href: filters::payment_message_link(
                &state.config.message_base_url,
                &column.name,
                block.start,
                block.end,
            ),
            title: format!(
                "{} to {}",
                filters::format_day_label(block.start),
                filters::format_day_label(block.end)
            ),
        })
        .collect();

    TeamColumnView {
        name: column.name.clone(),
        download_url,
        blocks,
    }
}
