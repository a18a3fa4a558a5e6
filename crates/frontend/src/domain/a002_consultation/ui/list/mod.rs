use crate::shared::api_utils::get_json;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_datetime, format_duration_minutes};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a002_consultation::Consultation;
use contracts::enums::{ConsultationMode, ConsultationStatus};
use leptos::prelude::*;
use thaw::*;

pub fn consultation_status_variant(status: ConsultationStatus) -> &'static str {
    match status {
        ConsultationStatus::Booked | ConsultationStatus::Awaiting => "warning",
        ConsultationStatus::Ongoing => "primary",
        ConsultationStatus::Completed => "success",
        ConsultationStatus::Cancelled | ConsultationStatus::Refunded => "neutral",
        ConsultationStatus::Disputed => "error",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsultationRow {
    pub id: String,
    pub patient_name: String,
    pub professional_name: String,
    pub mode: ConsultationMode,
    pub status: ConsultationStatus,
    pub scheduled_at: String,
    pub duration: String,
    pub fee: String,
    pub has_prescription: bool,
}

impl From<Consultation> for ConsultationRow {
    fn from(c: Consultation) -> Self {
        let duration = c
            .effective_duration_minutes()
            .map(format_duration_minutes)
            .unwrap_or_else(|| "—".to_string());
        let has_prescription = c.has_prescription();
        Self {
            professional_name: c
                .professional
                .as_ref()
                .map(|p| p.display_name())
                .unwrap_or(c.professional_id),
            id: c.id,
            patient_name: c.patient_name,
            mode: c.mode,
            status: c.status,
            scheduled_at: format_datetime(&c.scheduled_at),
            duration,
            fee: format_money(c.fee),
            has_prescription,
        }
    }
}

/// Keeps rows whose status matches `filter`; empty filter keeps everything
fn filter_rows(rows: &[ConsultationRow], filter: &str) -> Vec<ConsultationRow> {
    match ConsultationStatus::from_code(filter) {
        Some(status) => rows.iter().filter(|r| r.status == status).cloned().collect(),
        None => rows.to_vec(),
    }
}

fn active_count(rows: &[ConsultationRow]) -> usize {
    rows.iter().filter(|r| r.status.is_active()).count()
}

/// Finished consultations are shown muted
fn is_muted(status: ConsultationStatus) -> bool {
    status.is_final()
}

#[component]
pub fn ConsultationsList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<ConsultationRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let status_filter = RwSignal::new(String::new());

    wasm_bindgen_futures::spawn_local(async move {
        match get_json::<Vec<Consultation>>("/api/consultations").await {
            Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
            Err(e) => {
                log::error!("failed to load consultations: {}", e);
                toast.error(format!("Could not load consultations: {}", e));
                set_error.set(Some(e));
            }
        }
    });

    let visible = Memo::new(move |_| items.with(|rows| filter_rows(rows, &status_filter.get())));

    view! {
        <PageFrame page_id="a002_consultation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Consultations"</h2>
                    <UiBadge variant="primary".to_string()>
                        {move || visible.get().len().to_string()}
                    </UiBadge>
                    <UiBadge variant="success".to_string()>
                        {move || format!("{} active", items.with(|rows| active_count(rows)))}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Select value=status_filter>
                        <option value="">"All statuses"</option>
                        {ConsultationStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Patient"</TableHeaderCell>
                            <TableHeaderCell>"Professional"</TableHeaderCell>
                            <TableHeaderCell>"Mode"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Scheduled"</TableHeaderCell>
                            <TableHeaderCell>"Duration"</TableHeaderCell>
                            <TableHeaderCell>"Fee"</TableHeaderCell>
                            <TableHeaderCell>"Rx"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|row| row.id.clone()
                            children=move |row: ConsultationRow| {
                                view! {
                                    <TableRow class:table__row--muted=is_muted(row.status)>
                                        <TableCell>{row.patient_name}</TableCell>
                                        <TableCell>{row.professional_name}</TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {icon(row.mode.icon_name())}
                                                " "
                                                {row.mode.display_name()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <UiBadge variant=consultation_status_variant(row.status).to_string()>
                                                {row.status.display_name()}
                                            </UiBadge>
                                        </TableCell>
                                        <TableCell>{row.scheduled_at}</TableCell>
                                        <TableCell>{row.duration}</TableCell>
                                        <TableCell class="text-right">{row.fee}</TableCell>
                                        <TableCell>{if row.has_prescription { "Yes" } else { "—" }}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, status: ConsultationStatus) -> ConsultationRow {
        ConsultationRow {
            id: id.into(),
            patient_name: String::new(),
            professional_name: String::new(),
            mode: ConsultationMode::Chat,
            status,
            scheduled_at: String::new(),
            duration: String::new(),
            fee: String::new(),
            has_prescription: false,
        }
    }

    #[test]
    fn test_filter_rows() {
        let rows = vec![
            row("1", ConsultationStatus::Booked),
            row("2", ConsultationStatus::Disputed),
            row("3", ConsultationStatus::Booked),
        ];
        assert_eq!(filter_rows(&rows, "").len(), 3);
        let booked = filter_rows(&rows, "BOOKED");
        assert_eq!(booked.len(), 2);
        assert!(booked.iter().all(|r| r.status == ConsultationStatus::Booked));
        assert_eq!(filter_rows(&rows, "REFUNDED").len(), 0);
    }

    #[test]
    fn test_active_count_and_muted_rows() {
        let rows = vec![
            row("1", ConsultationStatus::Booked),
            row("2", ConsultationStatus::Ongoing),
            row("3", ConsultationStatus::Completed),
            row("4", ConsultationStatus::Disputed),
        ];
        assert_eq!(active_count(&rows), 2);
        assert!(is_muted(ConsultationStatus::Completed));
        assert!(is_muted(ConsultationStatus::Refunded));
        // disputed still needs attention
        assert!(!is_muted(ConsultationStatus::Disputed));
    }
}
