use crate::shared::api_utils::get_json;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::number_format::{format_count, format_money, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use contracts::dashboards::d400_consultation_stats::ConsultationStats;
use contracts::enums::ConsultationMode;
use leptos::prelude::*;

/// Share of disputed consultations above which the card turns red, in percent
const DISPUTE_ALERT_PERCENT: f64 = 5.0;

fn dispute_tone(stats: &ConsultationStats) -> StatTone {
    if stats.total_consultations == 0 || stats.disputed_consultations == 0 {
        return StatTone::Neutral;
    }
    let share =
        stats.disputed_consultations as f64 * 100.0 / stats.total_consultations as f64;
    if share >= DISPUTE_ALERT_PERCENT {
        StatTone::Bad
    } else {
        StatTone::Warning
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let toast = use_toast();
    let stats = RwSignal::new(None::<ConsultationStats>);

    wasm_bindgen_futures::spawn_local(async move {
        match get_json::<ConsultationStats>("/api/stats/consultations").await {
            Ok(s) => stats.set(Some(s)),
            Err(e) => {
                log::error!("failed to load consultation stats: {}", e);
                toast.error(format!("Could not load statistics: {}", e));
            }
        }
    });

    let pick = move |f: fn(&ConsultationStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Overview"</h2>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Consultations"
                        icon_name="stethoscope"
                        value=pick(|s| format_count(s.total_consultations))
                        subtitle=pick(|s| match s.completion_rate() {
                            Some(rate) => format!("{}% completed", format_number(rate, 1)),
                            None => "No consultations yet".to_string(),
                        })
                    />
                    <StatCard
                        label="Ongoing"
                        icon_name="activity"
                        value=pick(|s| format_count(s.ongoing_consultations))
                        tone=Signal::derive(move || {
                            if stats.with(|s| s.as_ref().map_or(false, |s| s.ongoing_consultations > 0)) {
                                StatTone::Good
                            } else {
                                StatTone::Neutral
                            }
                        })
                    />
                    <StatCard
                        label="Disputed"
                        icon_name="alert-circle"
                        value=pick(|s| format_count(s.disputed_consultations))
                        tone=Signal::derive(move || stats.with(|s| s.as_ref().map(dispute_tone).unwrap_or_default()))
                        subtitle=pick(|s| format!("{} cancelled", format_count(s.cancelled_consultations)))
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="dollar-sign"
                        value=pick(|s| format_money(s.total_revenue))
                    />
                    <StatCard
                        label="Doctors"
                        icon_name="users"
                        value=pick(|s| format_count(s.total_professionals))
                        subtitle=pick(|s| format!("{} active", format_count(s.active_professionals)))
                    />
                    <StatCard
                        label="Average rating"
                        icon_name="star"
                        value=pick(|s| s.average_rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "—".to_string()))
                    />
                </div>

                <div class="stat-grid">
                    {ConsultationMode::all().into_iter().map(|mode| {
                        view! {
                            <StatCard
                                label=mode.display_name()
                                icon_name=mode.icon_name()
                                value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| format_count(s.count_for_mode(mode)))))
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64, disputed: u64) -> ConsultationStats {
        ConsultationStats {
            total_consultations: total,
            completed_consultations: 0,
            ongoing_consultations: 0,
            cancelled_consultations: 0,
            disputed_consultations: disputed,
            total_professionals: 0,
            active_professionals: 0,
            total_revenue: 0.0,
            average_rating: None,
            consultations_by_mode: vec![],
            consultations_by_specialty: vec![],
        }
    }

    #[test]
    fn test_dispute_tone() {
        assert_eq!(dispute_tone(&stats(0, 0)), StatTone::Neutral);
        assert_eq!(dispute_tone(&stats(100, 0)), StatTone::Neutral);
        assert_eq!(dispute_tone(&stats(100, 2)), StatTone::Warning);
        assert_eq!(dispute_tone(&stats(100, 5)), StatTone::Bad);
    }
}
