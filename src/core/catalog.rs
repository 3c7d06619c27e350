use crate::domain::model::{ProjectRecord, RelatedArticle};
use std::sync::LazyLock;

/// Ordered, read-only set of projects shown on the site.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Exact, case-sensitive match on `id`. `None` is a normal outcome.
    pub fn find(&self, project_id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == project_id)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn article(title: &str, url: &str) -> RelatedArticle {
    RelatedArticle {
        title: title.to_string(),
        url: url.to_string(),
    }
}

static SITE_CATALOG: LazyLock<ProjectCatalog> = LazyLock::new(|| {
    ProjectCatalog::new(vec![
        ProjectRecord {
            id: "landslide-monitoring".to_string(),
            title: "Landslide-Monitoring".to_string(),
            short_description: "Advanced communication unit utilizing LoRa, WiFi, and 4G technologies for comprehensive landslide monitoring in remote areas.".to_string(),
            full_description: "Our Landslide-Monitoring system is designed to provide early warnings for potential landslide events in vulnerable regions. The system deploys a network of sensors that monitor soil moisture, movement, and pressure to detect early signs of land instability.\n\n\
The communication unit uses multiple protocols to ensure reliable data transmission even in remote areas with limited connectivity. LoRa provides long-range, low-power communication, while 4G and WiFi offer higher bandwidth when available.\n\n\
The ESP32 microcontroller serves as the brain of the operation, efficiently managing power consumption to extend battery life in the field.".to_string(),
            technologies: strings(&["LoRa", "WiFi", "4G", "ESP32"]),
            accent_color: "#A3C6D4".to_string(),
            features: strings(&[
                "Multi-protocol communication for reliable data transmission",
                "Solar-powered for extended field deployment",
                "Real-time alerts via SMS and web dashboard",
                "Low-power sleep modes for battery conservation",
                "Ruggedized enclosure for harsh weather conditions",
            ]),
            repository_url: Some("https://github.com/MonDesa/landslide-monitoring".to_string()),
            website_url: Some("https://mondesa.org/projects/landslide-monitoring".to_string()),
            related_articles: vec![
                article(
                    "Early Detection Systems for Landslides in Mountainous Regions",
                    "https://mondesa.org/blog/landslide-detection-systems",
                ),
                article(
                    "LoRa vs 4G: Choosing the Right Communication Protocol for Remote Monitoring",
                    "https://mondesa.org/blog/lora-vs-4g",
                ),
            ],
        },
        ProjectRecord {
            id: "enemeter".to_string(),
            title: "EneMeter".to_string(),
            short_description: "Sophisticated energy monitoring system designed for low-power devices, enabling long-term deployment in the field.".to_string(),
            full_description: "EneMeter is our solution for precise energy consumption monitoring in low-power IoT devices deployed in remote locations. The system provides detailed analytics on power usage patterns, helping to optimize battery life and solar charging cycles.\n\n\
By continuously monitoring current draw, voltage levels, and charging efficiency, EneMeter can predict battery lifespan and recommend optimizations to extend deployment duration without maintenance visits.\n\n\
The system integrates with our cloud platform to provide historical data analysis and predictive maintenance scheduling, ensuring that field devices remain operational year-round.".to_string(),
            technologies: strings(&["ESP32", "Solar Power"]),
            accent_color: "#B4C9A9".to_string(),
            features: strings(&[
                "Precision current and voltage monitoring",
                "Solar charging optimization algorithms",
                "Cloud-based analytics dashboard",
                "Predictive maintenance alerts",
            ]),
            repository_url: Some("https://github.com/MonDesa/enemeter".to_string()),
            website_url: None,
            related_articles: vec![article(
                "Maximizing Battery Life in Field-Deployed IoT Devices",
                "https://mondesa.org/blog/battery-optimization",
            )],
        },
        ProjectRecord {
            id: "sensornodelib".to_string(),
            title: "SensorNodeLib".to_string(),
            short_description: "Modular firmware library for ESP32 with advanced wake/sleep logic, optimizing power consumption for IoT devices.".to_string(),
            full_description: "SensorNodeLib is our open-source firmware library that provides a robust foundation for building energy-efficient IoT sensor nodes. The library implements sophisticated wake/sleep management, ensuring devices consume minimal power while still responding promptly to critical events.\n\n\
The modular architecture allows developers to easily add support for different sensors, communication protocols, and power sources without having to reinvent complex power management logic.\n\n\
Built on FreeRTOS, the library offers task prioritization, allowing critical alerts to take precedence over routine data collection while maintaining overall system efficiency.".to_string(),
            technologies: strings(&["C++", "ESP-IDF", "FreeRTOS"]),
            accent_color: "#D9BBA0".to_string(),
            features: strings(&[
                "Event-driven wake/sleep scheduling",
                "Modular sensor driver architecture",
                "Pre-built communication protocol handlers",
                "Comprehensive power profiling tools",
                "Over-the-air update support",
            ]),
            repository_url: Some("https://github.com/MonDesa/sensornodelib".to_string()),
            website_url: Some("https://sensornodelib.mondesa.org".to_string()),
            related_articles: vec![
                article(
                    "Building Energy-Efficient Firmware for Environmental Monitoring",
                    "https://mondesa.org/blog/energy-efficient-firmware",
                ),
                article(
                    "FreeRTOS Best Practices for IoT Applications",
                    "https://mondesa.org/blog/freertos-practices",
                ),
            ],
        },
    ])
});

/// The process-wide project catalog.
pub fn site_catalog() -> &'static ProjectCatalog {
    &SITE_CATALOG
}
