//! Proxy sensor classification.
//!
//! Maps each proxy metric entity onto an icon and a color class by testing
//! its identifier, case-insensitively, against an ordered list of category
//! tokens. First match wins. The order is deliberate: humidity is tested
//! before moisture/water because identifiers may contain overlapping tokens
//! ("soil_humidity_water" must land on humidity).

use crate::entity::EntityState;

const DEFAULT_ICON: &str = "mdi:chart-bell-curve-cumulative";

/// Display category of a proxy sensor, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Temperature,
    Humidity,
    Energy,
    Light,
    Moisture,
    Door,
    Generic,
}

/// Color class attached to a metric chip. Maps onto the front-end's accent
/// colors; `None` renders with the default chip styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorClass {
    Temp,
    Humidity,
    Energy,
    Light,
    #[default]
    None,
}

/// Result of classifying one proxy sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub icon: String,
    pub color_class: ColorClass,
}

/// Classify a proxy sensor by its identifier (and, for doors only, its
/// current value). Total and deterministic: exactly one category is chosen
/// for any input, and identical input yields identical output.
pub fn classify(entity: &EntityState) -> Classification {
    let id = entity.entity_id.to_lowercase();

    if id.contains("temp") {
        return category(Category::Temperature, "mdi:thermometer", ColorClass::Temp);
    }
    if id.contains("humid") {
        return category(Category::Humidity, "mdi:water-percent", ColorClass::Humidity);
    }
    if id.contains("energy") || id.contains("power") {
        return category(Category::Energy, "mdi:flash", ColorClass::Energy);
    }
    if id.contains("light") || id.contains("bright") {
        return category(Category::Light, "mdi:white-balance-sunny", ColorClass::Light);
    }
    // Moisture shares tokens with humidity; it must be tested after.
    if id.contains("moist") || id.contains("water") {
        return category(Category::Moisture, "mdi:watering-can", ColorClass::Humidity);
    }
    if id.contains("door") || id.contains("tür") {
        // The one category where the current value, not the identifier,
        // picks the icon.
        let icon = if entity.state.to_lowercase() == "open" {
            "mdi:door-open"
        } else {
            "mdi:door-closed"
        };
        return category(Category::Door, icon, ColorClass::None);
    }

    // No match: fall back to the entity's own icon hint when present.
    let icon = entity
        .attributes
        .icon
        .clone()
        .unwrap_or_else(|| DEFAULT_ICON.to_string());
    Classification {
        category: Category::Generic,
        icon,
        color_class: ColorClass::None,
    }
}

fn category(category: Category, icon: &str, color_class: ColorClass) -> Classification {
    Classification {
        category,
        icon: icon.to_string(),
        color_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Attributes;

    fn sensor(id: &str, state: &str) -> EntityState {
        EntityState::new(id, state)
    }

    #[test]
    fn test_temperature_classification() {
        let c = classify(&sensor("sensor.plantrun_temp_run1", "24"));
        assert_eq!(c.category, Category::Temperature);
        assert_eq!(c.icon, "mdi:thermometer");
        assert_eq!(c.color_class, ColorClass::Temp);
    }

    #[test]
    fn test_humidity_classification() {
        let c = classify(&sensor("sensor.plantrun_humidity_run1", "60"));
        assert_eq!(c.category, Category::Humidity);
        assert_eq!(c.icon, "mdi:water-percent");
        assert_eq!(c.color_class, ColorClass::Humidity);
    }

    #[test]
    fn test_energy_and_power_tokens() {
        assert_eq!(
            classify(&sensor("sensor.plantrun_energy_run1", "12")).category,
            Category::Energy
        );
        assert_eq!(
            classify(&sensor("sensor.plantrun_power_draw_run1", "120")).category,
            Category::Energy
        );
    }

    #[test]
    fn test_light_and_bright_tokens() {
        assert_eq!(
            classify(&sensor("sensor.plantrun_light_run1", "on")).category,
            Category::Light
        );
        assert_eq!(
            classify(&sensor("sensor.plantrun_brightness_run1", "800")).category,
            Category::Light
        );
    }

    #[test]
    fn test_humidity_wins_over_water() {
        // Overlapping tokens: humidity is tested first.
        let c = classify(&sensor("sensor.plantrun_soil_humidity_water_run1", "40"));
        assert_eq!(c.category, Category::Humidity);
        assert_eq!(c.icon, "mdi:water-percent");
    }

    #[test]
    fn test_moisture_classification_shares_humidity_color() {
        let c = classify(&sensor("sensor.plantrun_soil_moisture_run1", "40"));
        assert_eq!(c.category, Category::Moisture);
        assert_eq!(c.icon, "mdi:watering-can");
        assert_eq!(c.color_class, ColorClass::Humidity);
    }

    #[test]
    fn test_door_icon_follows_current_value() {
        let open = classify(&sensor("sensor.plantrun_door_run1", "Open"));
        assert_eq!(open.category, Category::Door);
        assert_eq!(open.icon, "mdi:door-open");

        let closed = classify(&sensor("sensor.plantrun_door_run1", "closed"));
        assert_eq!(closed.icon, "mdi:door-closed");

        let tuer = classify(&sensor("sensor.plantrun_tür_run1", "unknown"));
        assert_eq!(tuer.category, Category::Door);
        assert_eq!(tuer.icon, "mdi:door-closed");
    }

    #[test]
    fn test_generic_fallback_uses_entity_icon_hint() {
        let entity = sensor("sensor.plantrun_ph_run1", "6.2").with_attributes(Attributes {
            icon: Some("mdi:ph".to_string()),
            ..Attributes::default()
        });
        let c = classify(&entity);
        assert_eq!(c.category, Category::Generic);
        assert_eq!(c.icon, "mdi:ph");
        assert_eq!(c.color_class, ColorClass::None);
    }

    #[test]
    fn test_generic_fallback_default_icon() {
        let c = classify(&sensor("sensor.plantrun_ph_run1", "6.2"));
        assert_eq!(c.icon, "mdi:chart-bell-curve-cumulative");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let entity = sensor("sensor.plantrun_temp_run1", "24");
        assert_eq!(classify(&entity), classify(&entity));
    }
}
