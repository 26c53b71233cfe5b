//! Text rendering for view states and collaborator lists.
//!
//! One renderer serves every terminal width: wide terminals get aligned
//! label/value rows, narrow ones get stacked rows. There are no separate
//! mobile/desktop variants.

use crate::error::AppError;
use crate::models::{
    AreaModel, AssetModel, SchoolModel, ServiceRecordModel, UpdateLogModel, UserProfileModel,
};
use crate::view::ViewState;

const NARROW_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 12;

pub struct Presenter {
    width: usize,
}

impl Presenter {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(20) }
    }

    pub fn render_state(&self, state: &ViewState) -> String {
        match state {
            ViewState::Loading => "Verifying...".to_string(),
            ViewState::Ready(asset) => self.render_asset(asset),
            ViewState::Failed(err) => self.render_error(err),
        }
    }

    pub fn render_asset(&self, asset: &AssetModel) -> String {
        let mut out = String::new();

        out.push_str(&self.rule());
        out.push_str(&format!(
            "{}\n",
            asset.brand.as_deref().unwrap_or("Unknown brand")
        ));
        if let Some(model) = asset.model_series.as_deref() {
            out.push_str(&format!("{}\n", model));
        }
        out.push_str(&format!("Status: {}\n", asset.status));

        out.push_str(&self.section("Identity"));
        out.push_str(&self.row("Category", asset.category_label()));
        out.push_str(&self.row("Barcode", Some(&asset.barcode)));
        out.push_str(&self.row("S/N", asset.serial_number.as_deref()));

        out.push_str(&self.section("Specification"));
        out.push_str(&self.row("Processor", asset.processor.as_deref()));
        out.push_str(&self.row("RAM", asset.ram.as_deref()));
        out.push_str(&self.row("Storage", asset.storage.as_deref()));

        out.push_str(&self.section("Location"));
        out.push_str(&self.row("Room", asset.room.as_deref()));
        out.push_str(&self.row("Placement", asset.placement.as_deref()));
        out.push_str(&self.row("User", asset.assigned_to.as_deref()));

        out.push_str(&self.rule());
        out
    }

    /// Error card with the taxonomy-specific message and the only two
    /// recovery actions on offer: re-scan or go home.
    pub fn render_error(&self, err: &AppError) -> String {
        let message = match err {
            AppError::NotFound(_) | AppError::UnrecognizedPayload | AppError::MalformedAssetId(_) => {
                err.to_string()
            }
            _ => "failed to load asset data".to_string(),
        };
        format!(
            "{rule}Could not load\n{message}\n\nActions: [s]can again  [h]ome\n{rule}",
            rule = self.rule(),
            message = message,
        )
    }

    pub fn render_area(&self, area: &AreaModel, schools: &[SchoolModel]) -> String {
        let mut out = format!("Area {} - {} schools\n", area.name, schools.len());
        for school in schools {
            out.push_str(&format!("  [{}] {}\n", school.id, school.name));
        }
        out
    }

    pub fn render_school(&self, school: &SchoolModel, assets: &[AssetModel]) -> String {
        format!(
            "{} - {} assets\n{}",
            school.name,
            assets.len(),
            self.render_assets(assets)
        )
    }

    pub fn render_assets(&self, assets: &[AssetModel]) -> String {
        let mut out = String::new();
        for asset in assets {
            out.push_str(&format!(
                "[{}] {}  {}  {}\n",
                asset.id,
                asset.barcode,
                asset.display_name(),
                asset.status,
            ));
        }
        if out.is_empty() {
            out.push_str("No assets registered.\n");
        }
        out
    }

    pub fn render_services(&self, records: &[ServiceRecordModel]) -> String {
        let mut out = String::new();
        for record in records {
            out.push_str(&format!(
                "{}  {}  {}  {}  {}\n",
                record.ticket_no.as_deref().unwrap_or("-"),
                record
                    .service_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                record.sn_or_barcode,
                record.asset_name.as_deref().unwrap_or("-"),
                record.status,
            ));
        }
        if out.is_empty() {
            out.push_str("No service records.\n");
        }
        out
    }

    pub fn render_logs(&self, logs: &[UpdateLogModel]) -> String {
        let mut out = String::new();
        for log in logs {
            out.push_str(&format!(
                "{}  {}  {}  {}\n",
                log.timestamp
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string()),
                log.action,
                log.asset_name.as_deref().unwrap_or("-"),
                log.details.as_deref().unwrap_or("-"),
            ));
        }
        if out.is_empty() {
            out.push_str("No log entries.\n");
        }
        out
    }

    pub fn render_profile(&self, profile: &UserProfileModel) -> String {
        let mut out = String::new();
        out.push_str(&self.row("Name", Some(&profile.full_name)));
        out.push_str(&self.row("Email", profile.email.as_deref()));
        out
    }

    fn row(&self, label: &str, value: Option<&str>) -> String {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => "-",
        };
        if self.width < NARROW_WIDTH {
            format!("{}\n  {}\n", label, self.truncate(value, self.width - 2))
        } else {
            format!(
                "{:<label_width$}{}\n",
                label,
                self.truncate(value, self.width - LABEL_WIDTH),
                label_width = LABEL_WIDTH,
            )
        }
    }

    fn section(&self, title: &str) -> String {
        format!("\n-- {} --\n", title.to_uppercase())
    }

    fn rule(&self) -> String {
        format!("{}\n", "-".repeat(self.width))
    }

    fn truncate(&self, value: &str, max: usize) -> String {
        if value.chars().count() <= max {
            value.to_string()
        } else {
            let kept: String = value.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(72)
    }
}
