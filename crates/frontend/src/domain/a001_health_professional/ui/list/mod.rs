use crate::shared::api_utils::get_json;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a001_health_professional::HealthProfessional;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug)]
pub struct ProfessionalRow {
    pub id: String,
    pub name: String,
    pub specialty: &'static str,
    pub license_number: String,
    pub experience: String,
    pub rating: String,
    pub fee: String,
    pub verified: bool,
    pub bookable: bool,
}

impl From<HealthProfessional> for ProfessionalRow {
    fn from(p: HealthProfessional) -> Self {
        Self {
            name: p.display_name(),
            specialty: p.specialty.display_name(),
            experience: format!("{} yrs", p.years_of_experience),
            rating: p
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "—".to_string()),
            fee: format_money(p.consultation_fee),
            verified: p.is_verified,
            bookable: p.is_bookable(),
            id: p.id,
            license_number: p.license_number,
        }
    }
}

#[component]
pub fn ProfessionalsList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<ProfessionalRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match get_json::<Vec<HealthProfessional>>("/api/professionals").await {
            Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
            Err(e) => {
                log::error!("failed to load professionals: {}", e);
                toast.error(format!("Could not load doctors: {}", e));
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <PageFrame page_id="a001_health_professional--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Doctors"</h2>
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
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Specialty"</TableHeaderCell>
                            <TableHeaderCell>"License"</TableHeaderCell>
                            <TableHeaderCell>"Experience"</TableHeaderCell>
                            <TableHeaderCell>"Rating"</TableHeaderCell>
                            <TableHeaderCell>"Fee"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|row| row.id.clone()
                            children=move |row: ProfessionalRow| {
                                let (variant, label) = match (row.verified, row.bookable) {
                                    (false, _) => ("warning", "Unverified"),
                                    (true, true) => ("success", "Available"),
                                    (true, false) => ("neutral", "Away"),
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{row.name}</TableCell>
                                        <TableCell>{row.specialty}</TableCell>
                                        <TableCell>{row.license_number}</TableCell>
                                        <TableCell>{row.experience}</TableCell>
                                        <TableCell>{row.rating}</TableCell>
                                        <TableCell class="text-right">{row.fee}</TableCell>
                                        <TableCell>
                                            <UiBadge variant=variant.to_string()>{label}</UiBadge>
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
