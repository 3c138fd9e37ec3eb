use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};
use crate::config;
use crate::diagram::svg::num;
use crate::modal::SchedulerEmbed;

const OPEN_HOUR: i64 = 10;
const CLOSE_HOUR: u32 = 17;
const KPI_ROTATE_MS: u32 = 3800;

pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
    pub series: &'static [f64],
}

pub const KPIS: [Kpi; 3] = [
    Kpi { value: "+27%", label: "Booked calls", series: &[10.0, 12.0, 11.0, 13.0, 15.0, 16.0, 17.0, 18.0, 19.0] },
    Kpi { value: "−43%", label: "Manual tasks", series: &[19.0, 18.0, 16.0, 15.0, 13.0, 12.0, 10.0, 9.0, 8.0] },
    Kpi { value: "3.8×", label: "ROI", series: &[1.1, 1.2, 1.6, 2.1, 2.4, 2.9, 3.2, 3.6, 3.8] },
];

/// Path for a sparkline scaled into a `width` x `height` box with a 1px inset.
pub fn sparkline_path(points: &[f64], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let min = points.iter().copied().fold(f64::INFINITY, f64::min);
    let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let steps = (points.len().max(2) - 1) as f64;
    points
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 / steps * (width - 2.0) + 1.0;
            let y = height - 1.0 - (v - min) / range * (height - 2.0);
            format!("{} {} {}", if i == 0 { "M" } else { "L" }, num(x), num(y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Drops seconds and moves up to the next :00 or :30.
pub fn round_to_next_half_hour(t: NaiveDateTime) -> NaiveDateTime {
    let t = t - Duration::seconds(t.second() as i64) - Duration::nanoseconds(t.nanosecond() as i64);
    match t.minute() {
        0 | 30 => t,
        m if m < 30 => t + Duration::minutes(30 - m as i64),
        m => t + Duration::minutes(60 - m as i64),
    }
}

/// The next `count` consult starts inside business hours, spaced out so
/// they do not look like a solid block.
pub fn generate_slots(now: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    let mut slots = Vec::with_capacity(count);
    let mut t = round_to_next_half_hour(now);
    while slots.len() < count {
        let (hour, minute) = (t.hour(), t.minute());
        if (hour as i64) < OPEN_HOUR {
            t = start_of(t.date()) + Duration::hours(OPEN_HOUR);
        } else if hour > CLOSE_HOUR || (hour == CLOSE_HOUR && minute > 0) {
            t = start_of(t.date()) + Duration::days(1) + Duration::hours(OPEN_HOUR);
        }
        slots.push(t);
        let step = [1, 2, 3][slots.len() % 3];
        t += Duration::minutes(30 * step);
    }
    slots
}

pub fn day_label(slot: NaiveDate, today: NaiveDate) -> String {
    match (slot - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => slot.format("%a").to_string(),
    }
}

pub fn format_ampm(t: NaiveTime) -> String {
    let (pm, hour) = t.hour12();
    format!("{}:{:02} {}", hour, t.minute(), if pm { "PM" } else { "AM" })
}

#[function_component(KpiStack)]
fn kpi_stack() -> Html {
    let idx = use_state(|| 0usize);
    {
        let idx = idx.clone();
        use_interval(move || idx.set((*idx + 1) % KPIS.len()), KPI_ROTATE_MS);
    }
    let kpi = &KPIS[*idx];

    html! {
        <div class="kpi-stack">
            <div class="eyebrow">{"Results"}</div>
            <div class="kpi-card" key={kpi.label}>
                <div>
                    <div class="kpi-value">{kpi.value}</div>
                    <div class="kpi-label">{kpi.label}</div>
                </div>
                <svg width="84" height="28" aria-hidden="true">
                    <defs>
                        <linearGradient id="spark-grad" x1="0" x2="1" y1="0" y2="0">
                            <stop offset="0%" stop-color="#22d3ee" />
                            <stop offset="50%" stop-color="#8b5cf6" />
                            <stop offset="100%" stop-color="#ec4899" />
                        </linearGradient>
                    </defs>
                    <path d={sparkline_path(kpi.series, 84.0, 28.0)} fill="none" stroke="url(#spark-grad)" stroke-width="2" />
                </svg>
            </div>
            <div class="kpi-dots">
                { for (0..KPIS.len()).map(|i| html! {
                    <span class={classes!("kpi-dot", (i == *idx).then(|| "active"))}></span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleCardProps {
    on_open: Callback<MouseEvent>,
}

#[function_component(ScheduleCard)]
fn schedule_card(props: &ScheduleCardProps) -> Html {
    let now = chrono::Local::now().naive_local();
    let slots = use_memo(|_| generate_slots(now, 3), ());
    let today = now.date();

    html! {
        <div class="schedule-card">
            <div class="schedule-title">{"📅 Book a free consult"}</div>
            <div class="schedule-sub">{"30 minutes • Strategy & next steps"}</div>
            <div class="schedule-slots">
                { for slots.iter().map(|slot| html! {
                    <button
                        type="button"
                        class="slot"
                        onclick={props.on_open.clone()}
                        data-evt={names::CTA_CLICK}
                        data-place="why_slot"
                    >
                        <span><strong>{day_label(slot.date(), today)}</strong>{" · "}{format_ampm(slot.time())}</span>
                        <span class="slot-arrow">{"→"}</span>
                    </button>
                }) }
            </div>
            <button
                type="button"
                class="see-all"
                onclick={props.on_open.clone()}
                data-evt={names::CTA_CLICK}
                data-place="why_all_times"
            >
                {"See all times"}
            </button>
        </div>
    }
}

#[function_component(WhySection)]
pub fn why_section() -> Html {
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="why-optimion" class="section-fade why">
            <div class="why-copy">
                <p class="eyebrow">{"What We Do"}</p>
                <h2 class="gradient-text">{"We Build Systems That Cut Busywork By Half."}</h2>
                <p class="lead">
                    {"Our team of experts build custom CRMs, powerful automations, and seamless integrations so you can stop fighting your tools and start scaling operations."}
                </p>
                <ul class="why-list">
                    <li>{"🔁 Advanced Workflow Automation"}</li>
                    <li>{"⚙️ Custom CRM Development"}</li>
                    <li>{"🔗 Multi-System Integration"}</li>
                    <li>{"📊 Real-Time Reporting & Dashboards"}</li>
                </ul>
            </div>
            <div class="why-side">
                <KpiStack />
                <ScheduleCard on_open={open} />
            </div>
            <SchedulerModal
                open={cal_open}
                on_close={close}
                embed={SchedulerEmbed::calendly(config::CALENDLY_EVENT_URL)}
                place="why"
                title="Book a free consult"
            />
            <style>
                {r#"
                    .why {
                        position: relative;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                        padding: 2.5rem 1.5rem 4rem;
                        color: #fff;
                    }
                    @media (min-width: 768px) { .why { padding: 6rem 4rem; flex-wrap: nowrap; } }
                    .why-copy { max-width: 36rem; }
                    .why-copy h2 { font-size: 2.5rem; font-weight: 500; line-height: 1.15; margin-bottom: 1.5rem; }
                    .why-list { list-style: none; padding: 0; display: grid; gap: 1rem; color: #e5e7eb; }
                    .why-list li { transition: transform 0.2s; }
                    .why-list li:hover { transform: scale(1.03); }
                    .why-side { width: 100%; max-width: 28rem; }
                    .kpi-card {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 84px;
                        box-sizing: border-box;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: rgba(0, 0, 0, 0.3);
                        animation: kpi-in 0.35s ease-out;
                    }
                    @keyframes kpi-in { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: none; } }
                    .kpi-value { font-size: 1.5rem; font-weight: 600; }
                    .kpi-label { font-size: 12px; color: #9ca3af; }
                    .kpi-dots { display: flex; gap: 0.25rem; margin-top: 0.5rem; }
                    .kpi-dot { width: 6px; height: 6px; border-radius: 50%; background: rgba(255,255,255,.2); }
                    .kpi-dot.active { background: rgba(255,255,255,.8); }
                    .schedule-card {
                        margin-top: 1rem;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                        animation: float 4.4s ease-in-out infinite;
                    }
                    @keyframes float { 0%, 100% { transform: translateY(-4px); } 50% { transform: translateY(4px); } }
                    .schedule-title { font-weight: 500; }
                    .schedule-sub { font-size: 0.75rem; color: #9ca3af; margin-top: 0.25rem; }
                    .schedule-slots { display: grid; gap: 0.5rem; margin-top: 1rem; }
                    .slot {
                        display: flex;
                        justify-content: space-between;
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.3);
                        color: #e5e7eb;
                        font-size: 13px;
                        cursor: pointer;
                        transition: transform 0.15s;
                    }
                    .slot:hover { transform: translateY(-2px); background: rgba(0, 0, 0, 0.4); }
                    .slot-arrow { color: rgba(255, 255, 255, 0.6); }
                    .see-all {
                        margin-top: 1rem;
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(90deg, #06b6d4, #ec4899);
                        color: #fff;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    @media (prefers-reduced-motion: reduce) { .schedule-card, .kpi-card { animation: none; } }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn rounds_up_to_half_hours() {
        assert_eq!(round_to_next_half_hour(at(2025, 3, 4, 9, 0)), at(2025, 3, 4, 9, 0));
        assert_eq!(round_to_next_half_hour(at(2025, 3, 4, 9, 10)), at(2025, 3, 4, 9, 30));
        assert_eq!(round_to_next_half_hour(at(2025, 3, 4, 9, 45)), at(2025, 3, 4, 10, 0));
        assert_eq!(round_to_next_half_hour(at(2025, 3, 4, 23, 50)), at(2025, 3, 5, 0, 0));
        let with_seconds = at(2025, 3, 4, 9, 30) + Duration::seconds(42);
        assert_eq!(round_to_next_half_hour(with_seconds), at(2025, 3, 4, 9, 30));
    }

    #[test]
    fn early_morning_starts_at_opening() {
        let slots = generate_slots(at(2025, 3, 4, 7, 12), 3);
        assert_eq!(slots, vec![at(2025, 3, 4, 10, 0), at(2025, 3, 4, 11, 0), at(2025, 3, 4, 12, 30)]);
    }

    #[test]
    fn late_afternoon_rolls_to_next_day() {
        let slots = generate_slots(at(2025, 3, 4, 16, 20), 3);
        assert_eq!(slots, vec![at(2025, 3, 4, 16, 30), at(2025, 3, 5, 10, 0), at(2025, 3, 5, 11, 30)]);
    }

    #[test]
    fn labels_days_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(today + Duration::days(1), today), "Tomorrow");
        assert_eq!(day_label(today + Duration::days(2), today), "Thu");
    }

    #[test]
    fn formats_twelve_hour_clock() {
        assert_eq!(format_ampm(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
        assert_eq!(format_ampm(NaiveTime::from_hms_opt(10, 0, 0).unwrap()), "10:00 AM");
        assert_eq!(format_ampm(NaiveTime::from_hms_opt(12, 30, 0).unwrap()), "12:30 PM");
        assert_eq!(format_ampm(NaiveTime::from_hms_opt(16, 30, 0).unwrap()), "4:30 PM");
    }

    #[test]
    fn sparkline_fits_the_box() {
        assert_eq!(sparkline_path(&[0.0, 1.0], 84.0, 28.0), "M 1 27 L 83 1");
        assert_eq!(sparkline_path(&[5.0, 5.0, 5.0], 84.0, 28.0), "M 1 27 L 42 27 L 83 27");
        assert_eq!(sparkline_path(&[], 84.0, 28.0), "");
    }
}
