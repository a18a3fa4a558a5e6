use crate::shared::api_utils::get_json;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_date, format_datetime_opt};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use chrono::{DateTime, Utc};
use contracts::domain::a003_prescription::Prescription;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug)]
pub struct PrescriptionRow {
    pub id: String,
    pub consultation_id: String,
    pub medications: String,
    pub course: String,
    pub issued_at: String,
    pub valid_until: String,
    pub is_valid: bool,
}

impl PrescriptionRow {
    fn from_prescription(p: Prescription, now: DateTime<Utc>) -> Self {
        let medications = p
            .medications
            .iter()
            .map(|m| format!("{} {} ({})", m.name, m.dosage, m.frequency))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            is_valid: p.is_valid_at(now),
            course: format!("{} days", p.course_days()),
            issued_at: format_date(&p.issued_at),
            valid_until: format_datetime_opt(p.valid_until.as_ref()),
            medications,
            id: p.id,
            consultation_id: p.consultation_id,
        }
    }
}

#[component]
pub fn PrescriptionsList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<PrescriptionRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match get_json::<Vec<Prescription>>("/api/prescriptions").await {
            Ok(v) => {
                let now = Utc::now();
                set_items.set(
                    v.into_iter()
                        .map(|p| PrescriptionRow::from_prescription(p, now))
                        .collect(),
                );
            }
            Err(e) => {
                log::error!("failed to load prescriptions: {}", e);
                toast.error(format!("Could not load prescriptions: {}", e));
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <PageFrame page_id="a003_prescription--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Prescriptions"</h2>
                    <UiBadge variant="primary".to_string()>
                        {move || items.get().len().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Consultation"</TableHeaderCell>
                            <TableHeaderCell>"Medications"</TableHeaderCell>
                            <TableHeaderCell>"Course"</TableHeaderCell>
                            <TableHeaderCell>"Issued"</TableHeaderCell>
                            <TableHeaderCell>"Valid until"</TableHeaderCell>
                            <TableHeaderCell>"State"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|row| row.id.clone()
                            children=move |row: PrescriptionRow| {
                                view! {
                                    <TableRow>
                                        <TableCell>{row.consultation_id}</TableCell>
                                        <TableCell>{row.medications}</TableCell>
                                        <TableCell>{row.course}</TableCell>
                                        <TableCell>{row.issued_at}</TableCell>
                                        <TableCell>{row.valid_until}</TableCell>
                                        <TableCell>
                                            {if row.is_valid {
                                                view! { <UiBadge variant="success".to_string()>"Valid"</UiBadge> }.into_any()
                                            } else {
                                                view! { <UiBadge variant="neutral".to_string()>"Expired"</UiBadge> }.into_any()
                                            }}
                                        </TableCell>
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
    use chrono::TimeZone;
    use contracts::domain::a003_prescription::Medication;

    #[test]
    fn test_row_from_prescription() {
        let p = Prescription {
            id: "rx-1".into(),
            consultation_id: "c-1".into(),
            professional_id: "p-1".into(),
            patient_id: "u-1".into(),
            medications: vec![Medication {
                name: "Ibuprofen".into(),
                dosage: "200mg".into(),
                frequency: "as needed".into(),
                duration_days: 5,
                notes: None,
            }],
            instructions: None,
            issued_at: Utc.with_ymd_and_hms(2024, 4, 2, 8, 0, 0).unwrap(),
            valid_until: None,
        };
        let row =
            PrescriptionRow::from_prescription(p, Utc.with_ymd_and_hms(2024, 4, 3, 0, 0, 0).unwrap());
        assert_eq!(row.medications, "Ibuprofen 200mg (as needed)");
        assert_eq!(row.course, "5 days");
        assert_eq!(row.issued_at, "02.04.2024");
        assert_eq!(row.valid_until, "—");
        assert!(row.is_valid);
    }
}
