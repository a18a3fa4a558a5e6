use leptos::prelude::*;

/// Colored pill for statuses
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_modifier(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_modifier(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_modifier() {
        assert_eq!(badge_modifier(Some("success")), "badge--success");
        assert_eq!(badge_modifier(Some("unknown")), "badge--neutral");
        assert_eq!(badge_modifier(None), "badge--neutral");
    }
}
