//! Declarative spec rule table.
//!
//! Every rule is `{group, key, facet, pattern, formatter}`. Patterns run
//! against lowercased text. A formatter may reject a match (returning `None`),
//! in which case the engine tries the next match of the same pattern.
//!
//! Within a key, rules are listed in precedence order. Facets only matter for
//! multi-valued keys: storage keeps SSD, HDD and eMMC side by side.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{SpecGroup, SpecKey};

/// Storage facets, in join order.
pub const FACET_SSD: u8 = 0;
pub const FACET_HDD: u8 = 1;
pub const FACET_EMMC: u8 = 2;

type CaptureFormatter = fn(&Captures<'_>) -> Option<String>;

#[derive(Debug, Clone, Copy)]
enum Formatter {
    Fixed(&'static str),
    Capture(CaptureFormatter),
}

/// One extraction rule.
#[derive(Debug, Clone)]
pub struct SpecRule {
    pub name: &'static str,
    pub group: SpecGroup,
    pub key: SpecKey,
    pub facet: u8,
    pattern: Regex,
    formatter: Formatter,
}

impl SpecRule {
    fn capture(
        name: &'static str,
        group: SpecGroup,
        key: SpecKey,
        pattern: &str,
        format: CaptureFormatter,
    ) -> Self {
        Self {
            name,
            group,
            key,
            facet: 0,
            pattern: compile(name, pattern),
            formatter: Formatter::Capture(format),
        }
    }

    fn fixed(
        name: &'static str,
        group: SpecGroup,
        key: SpecKey,
        pattern: &str,
        value: &'static str,
    ) -> Self {
        Self {
            name,
            group,
            key,
            facet: 0,
            pattern: compile(name, pattern),
            formatter: Formatter::Fixed(value),
        }
    }

    const fn facet(mut self, facet: u8) -> Self {
        self.facet = facet;
        self
    }

    /// Run this rule alone against already-lowercased text.
    #[must_use]
    pub fn apply(&self, normalized: &str) -> Option<String> {
        match self.formatter {
            Formatter::Fixed(value) => self
                .pattern
                .is_match(normalized)
                .then(|| value.to_string()),
            Formatter::Capture(format) => self
                .pattern
                .captures_iter(normalized)
                .find_map(|caps| format(&caps)),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid spec rule regex {name}: {err}"))
}

static DEFAULT_RULES: LazyLock<Vec<SpecRule>> = LazyLock::new(build_rules);

/// The built-in rule table, grouped in priority order.
#[must_use]
pub fn default_rules() -> &'static [SpecRule] {
    &DEFAULT_RULES
}

/// Look up a built-in rule by name.
#[must_use]
pub fn find_rule(name: &str) -> Option<&'static SpecRule> {
    default_rules().iter().find(|rule| rule.name == name)
}

// ---------------------------------------------------------------------------
// Capture helpers
// ---------------------------------------------------------------------------

fn cap<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}

fn number_in(caps: &Captures<'_>, idx: usize, min: f64, max: f64) -> Option<String> {
    let raw = cap(caps, idx);
    let value: f64 = raw.parse().ok()?;
    (min..=max).contains(&value).then(|| raw.to_string())
}

fn squash(raw: &str) -> String {
    raw.split_whitespace().collect()
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn squash_spaces(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_lines)]
fn build_rules() -> Vec<SpecRule> {
    use SpecGroup as G;
    use SpecKey as K;

    vec![
        // ===== Display =====
        SpecRule::capture(
            "screen_size",
            G::Display,
            K::ScreenSize,
            r#"\b(\d{1,3}(?:\.\d{1,2})?)\s*(?:"|''|”|-?\s*inch(?:es)?\b|-in(?:[\s.,;)]|$)|\s*in\.?\s*(?:$|[,;)]|(?:display|screen|monitor|panel|laptop|notebook|touchscreen|fhd|qhd|uhd|ips|oled|lcd|led)\b))"#,
            |c: &Captures<'_>| number_in(c, 1, 5.0, 100.0).map(|n| format!("{n}\"")),
        ),
        SpecRule::capture(
            "resolution_4k",
            G::Display,
            K::Resolution,
            r"\b(4k|uhd|2160p|3840\s*[x×]\s*2160)\b(\s+graphics)?",
            // "intel uhd graphics" is a GPU, not a panel
            |c: &Captures<'_>| c.get(2).is_none().then(|| "4K UHD".to_string()),
        ),
        SpecRule::fixed(
            "resolution_1440p",
            G::Display,
            K::Resolution,
            r"\b(?:wqhd|qhd\+?|1440p|2560\s*[x×]\s*1(?:440|600)|2\.[58]k|2k)(?:\b|$|\s)",
            "QHD 1440p",
        ),
        SpecRule::fixed(
            "resolution_1080p",
            G::Display,
            K::Resolution,
            r"\b(?:fhd\+?|full\s*hd|1080p|1920\s*[x×]\s*1(?:080|200))(?:\b|$|\s)",
            "Full HD 1080p",
        ),
        SpecRule::fixed(
            "resolution_720p",
            G::Display,
            K::Resolution,
            r"\b(?:1366\s*[x×]\s*768|1280\s*[x×]\s*720|hd\s+(?:display|screen|panel))\b",
            "HD 720p",
        ),
        SpecRule::capture(
            "refresh_rate",
            G::Display,
            K::RefreshRate,
            r"\b(\d{2,3})\s*hz\b",
            |c: &Captures<'_>| number_in(c, 1, 30.0, 600.0).map(|n| format!("{n}Hz")),
        ),
        SpecRule::capture(
            "panel",
            G::Display,
            K::Panel,
            r"\b(amoled|oled|qled|mini[\s-]?led|ips)\b",
            |c: &Captures<'_>| {
                let panel = cap(c, 1);
                Some(if panel.starts_with("mini") {
                    "Mini-LED".to_string()
                } else {
                    panel.to_uppercase()
                })
            },
        ),
        // ===== Processor =====
        SpecRule::capture(
            "intel_core_ultra",
            G::Processor,
            K::Processor,
            r"\b(?:intel\s+)?core\s+ultra\s+([579])(?:[\s-]+(\d{3}[a-z]{0,2}))?\b",
            |c: &Captures<'_>| {
                let model = cap(c, 2);
                Some(if model.is_empty() {
                    format!("Intel Core Ultra {}", cap(c, 1))
                } else {
                    format!("Intel Core Ultra {} {}", cap(c, 1), model.to_uppercase())
                })
            },
        ),
        SpecRule::capture(
            "intel_core_model",
            G::Processor,
            K::Processor,
            r"\b(?:intel\s+)?(?:core\s+)?(i[3579])[\s-]?(\d{4,5}[a-z]{0,3})\b",
            |c: &Captures<'_>| {
                Some(format!(
                    "Intel Core {}-{}",
                    cap(c, 1).to_uppercase(),
                    cap(c, 2).to_uppercase()
                ))
            },
        ),
        SpecRule::capture(
            "intel_core_family",
            G::Processor,
            K::Processor,
            r"\b(?:intel\s+)?core\s+(i[3579])\b|\bintel\s+(i[3579])\b",
            |c: &Captures<'_>| {
                let family = c.get(1).or_else(|| c.get(2))?.as_str();
                Some(format!("Intel Core {}", family.to_uppercase()))
            },
        ),
        SpecRule::capture(
            "amd_ryzen_model",
            G::Processor,
            K::Processor,
            r"\b(?:amd\s+)?ryzen\s+([3579])\s+(?:pro\s+)?(\d{4}[a-z]{0,2})\b",
            |c: &Captures<'_>| {
                Some(format!(
                    "AMD Ryzen {} {}",
                    cap(c, 1),
                    cap(c, 2).to_uppercase()
                ))
            },
        ),
        SpecRule::capture(
            "amd_ryzen_family",
            G::Processor,
            K::Processor,
            r"\b(?:amd\s+)?ryzen\s+([3579])\b",
            |c: &Captures<'_>| Some(format!("AMD Ryzen {}", cap(c, 1))),
        ),
        SpecRule::capture(
            "apple_silicon",
            G::Processor,
            K::Processor,
            r"\bapple\s+(m[1-4])(?:\s+(pro|max|ultra))?\b|\b(m[1-4])(?:\s+(pro|max|ultra))?\s+chip\b",
            |c: &Captures<'_>| {
                let chip = c.get(1).or_else(|| c.get(3))?.as_str().to_uppercase();
                let tier = c.get(2).or_else(|| c.get(4)).map(|m| title_case(m.as_str()));
                Some(match tier {
                    Some(tier) => format!("Apple {chip} {tier}"),
                    None => format!("Apple {chip}"),
                })
            },
        ),
        SpecRule::capture(
            "snapdragon",
            G::Processor,
            K::Processor,
            r"\b(?:qualcomm\s+)?snapdragon\s+(x\s+elite|x\s+plus|\d{3,4}[a-z]?|\d\s+gen\s+\d)\b",
            |c: &Captures<'_>| {
                Some(format!("Qualcomm Snapdragon {}", title_case(cap(c, 1))))
            },
        ),
        SpecRule::capture(
            "intel_entry",
            G::Processor,
            K::Processor,
            r"\b(?:intel\s+)?(celeron|pentium)(?:\s+([a-z]?\d{3,5}[a-z]?))?\b",
            |c: &Captures<'_>| {
                let family = title_case(cap(c, 1));
                let model = cap(c, 2);
                Some(if model.is_empty() {
                    format!("Intel {family}")
                } else {
                    format!("Intel {family} {}", model.to_uppercase())
                })
            },
        ),
        // ===== Memory =====
        SpecRule::capture(
            "ram_labeled",
            G::Memory,
            K::Ram,
            r"\b(\d{1,3})\s*gb\s*(?:(?:lp)?ddr[345]x?\s*)?(?:unified\s+)?(?:ram|memory)\b",
            |c: &Captures<'_>| number_in(c, 1, 1.0, 256.0).map(|n| format!("{n}GB RAM")),
        ),
        SpecRule::capture(
            "ram_ddr",
            G::Memory,
            K::Ram,
            r"\b(\d{1,3})\s*gb\s+(?:lp)?ddr[345]x?\b",
            |c: &Captures<'_>| number_in(c, 1, 1.0, 256.0).map(|n| format!("{n}GB RAM")),
        ),
        SpecRule::capture(
            "ram_prefixed",
            G::Memory,
            K::Ram,
            r"\b(?:ram|memory)\s*[:\-]?\s*(\d{1,3})\s*gb\b",
            |c: &Captures<'_>| number_in(c, 1, 1.0, 256.0).map(|n| format!("{n}GB RAM")),
        ),
        // ===== Storage =====
        SpecRule::capture(
            "ssd_sized",
            G::Storage,
            K::Storage,
            r"\b(\d+(?:\.\d+)?)\s*(tb|gb)\s*(?:(?:pcie(?:\s*\d\.\d)?|nvme|m\.2|gen\s*\d)\s*)*(?:ssd|solid[\s-]state)",
            |c: &Captures<'_>| Some(format!("{}{} SSD", cap(c, 1), cap(c, 2).to_uppercase())),
        )
        .facet(FACET_SSD),
        SpecRule::capture(
            "ssd_prefixed",
            G::Storage,
            K::Storage,
            r"\bssd\s*[:\-]?\s*(\d+(?:\.\d+)?)\s*(tb|gb)\b",
            |c: &Captures<'_>| Some(format!("{}{} SSD", cap(c, 1), cap(c, 2).to_uppercase())),
        )
        .facet(FACET_SSD),
        SpecRule::capture(
            "hdd_sized",
            G::Storage,
            K::Storage,
            r"\b(\d+(?:\.\d+)?)\s*(tb|gb)\s*(?:\d{4}\s*rpm\s*)?(?:hdd|hard\s+(?:disk\s+)?drive)\b",
            |c: &Captures<'_>| Some(format!("{}{} HDD", cap(c, 1), cap(c, 2).to_uppercase())),
        )
        .facet(FACET_HDD),
        SpecRule::capture(
            "emmc_sized",
            G::Storage,
            K::Storage,
            r"\b(\d{2,3})\s*gb\s*emmc\b",
            |c: &Captures<'_>| Some(format!("{}GB eMMC", cap(c, 1))),
        )
        .facet(FACET_EMMC),
        // ===== Graphics =====
        SpecRule::capture(
            "nvidia_geforce",
            G::Graphics,
            K::Graphics,
            r"\b(?:nvidia\s+)?(?:geforce\s+)?(rtx|gtx)\s*(\d{3,4})(\s*ti)?\b",
            |c: &Captures<'_>| {
                let ti = if c.get(3).is_some() { " Ti" } else { "" };
                Some(format!("NVIDIA {} {}{ti}", cap(c, 1).to_uppercase(), cap(c, 2)))
            },
        ),
        SpecRule::capture(
            "amd_radeon",
            G::Graphics,
            K::Graphics,
            r"\b(?:amd\s+)?radeon\s+(rx\s*\d{3,4}[a-z]{0,2}|\d{3,4}m)\b",
            |c: &Captures<'_>| {
                let model = cap(c, 1).to_uppercase().replacen("RX", "RX ", 1);
                Some(format!("AMD Radeon {}", squash_spaces(&model)))
            },
        ),
        SpecRule::capture(
            "intel_arc",
            G::Graphics,
            K::Graphics,
            r"\b(?:intel\s+)?arc\s+(a\d{3}m?)\b",
            |c: &Captures<'_>| Some(format!("Intel Arc {}", cap(c, 1).to_uppercase())),
        ),
        SpecRule::capture(
            "apple_gpu_cores",
            G::Graphics,
            K::Graphics,
            r"\b(\d{1,2})[\s-]core\s+gpu\b",
            |c: &Captures<'_>| Some(format!("{}-core GPU", cap(c, 1))),
        ),
        SpecRule::fixed(
            "amd_radeon_integrated",
            G::Graphics,
            K::Graphics,
            r"\bradeon\s+graphics\b",
            "AMD Radeon Graphics",
        ),
        SpecRule::fixed("intel_iris", G::Graphics, K::Graphics, r"\biris\s*xe\b", "Intel Iris Xe"),
        SpecRule::fixed(
            "intel_uhd",
            G::Graphics,
            K::Graphics,
            r"\bintel\s+uhd(?:\s+graphics)?\b",
            "Intel UHD Graphics",
        ),
        SpecRule::fixed(
            "integrated_graphics",
            G::Graphics,
            K::Graphics,
            r"\bintegrated\s+graphics\b",
            "Integrated Graphics",
        ),
        // ===== Connectivity =====
        SpecRule::capture(
            "wifi_generation",
            G::Connectivity,
            K::Wifi,
            r"\bwi-?fi\s*(7|6e|6|5)\b",
            |c: &Captures<'_>| Some(format!("Wi-Fi {}", cap(c, 1).to_uppercase())),
        ),
        SpecRule::capture(
            "wifi_ieee",
            G::Connectivity,
            K::Wifi,
            r"\b802\.11\s*(be|ax|ac)\b",
            |c: &Captures<'_>| {
                let generation = match cap(c, 1) {
                    "be" => "7",
                    "ax" => "6",
                    _ => "5",
                };
                Some(format!("Wi-Fi {generation}"))
            },
        ),
        SpecRule::fixed("wifi_plain", G::Connectivity, K::Wifi, r"\bwi-?fi\b", "Wi-Fi"),
        SpecRule::capture(
            "bluetooth_version",
            G::Connectivity,
            K::Bluetooth,
            r"\bbluetooth\s*v?(\d(?:\.\d)?)\b",
            |c: &Captures<'_>| Some(format!("Bluetooth {}", cap(c, 1))),
        ),
        SpecRule::fixed("bluetooth_plain", G::Connectivity, K::Bluetooth, r"\bbluetooth\b", "Bluetooth"),
        SpecRule::capture(
            "thunderbolt",
            G::Connectivity,
            K::Ports,
            r"\bthunderbolt\s*(\d)\b",
            |c: &Captures<'_>| Some(format!("Thunderbolt {}", cap(c, 1))),
        ),
        SpecRule::fixed("usb4", G::Connectivity, K::Ports, r"\busb\s?4\b", "USB4"),
        SpecRule::fixed("usb_c", G::Connectivity, K::Ports, r"\busb[\s-]?c\b|\btype[\s-]c\b", "USB-C"),
        SpecRule::capture(
            "hdmi",
            G::Connectivity,
            K::Ports,
            r"\bhdmi(?:\s*(\d\.\d))?\b",
            |c: &Captures<'_>| {
                Some(match c.get(1) {
                    Some(version) => format!("HDMI {}", version.as_str()),
                    None => "HDMI".to_string(),
                })
            },
        ),
        // ===== Audio =====
        SpecRule::fixed("dolby_atmos", G::Audio, K::Audio, r"\bdolby\s+atmos\b", "Dolby Atmos"),
        SpecRule::capture(
            "audio_brand",
            G::Audio,
            K::Audio,
            r"\b(harman\s*/?\s*kardon|bang\s*&\s*olufsen|b&o)\b",
            |c: &Captures<'_>| {
                Some(if cap(c, 1).starts_with("harman") {
                    "Harman Kardon".to_string()
                } else {
                    "Bang & Olufsen".to_string()
                })
            },
        ),
        SpecRule::capture(
            "speakers",
            G::Audio,
            K::Audio,
            r"\b(stereo|quad|dual)\s+speakers?\b",
            |c: &Captures<'_>| Some(format!("{} Speakers", title_case(cap(c, 1)))),
        ),
        SpecRule::fixed(
            "noise_cancelling",
            G::Audio,
            K::Audio,
            r"\b(?:active\s+)?noise[\s-]cancell?(?:ing|ation)\b",
            "Noise Cancelling",
        ),
        // ===== Input devices =====
        SpecRule::fixed(
            "keyboard_rgb",
            G::Input,
            K::Keyboard,
            r"\brgb\s+(?:backlit\s+)?keyboard\b|\bper[\s-]key\s+rgb\b",
            "RGB Backlit Keyboard",
        ),
        SpecRule::fixed(
            "keyboard_backlit",
            G::Input,
            K::Keyboard,
            r"\bbacklit\s+keyboard\b",
            "Backlit Keyboard",
        ),
        SpecRule::fixed(
            "keyboard_mechanical",
            G::Input,
            K::Keyboard,
            r"\bmechanical\s+keyboard\b",
            "Mechanical Keyboard",
        ),
        SpecRule::fixed(
            "touchscreen",
            G::Input,
            K::Touchscreen,
            r"\btouch[\s-]?screen\b|\btouch\s+display\b",
            "Touchscreen",
        ),
        // ===== Camera =====
        SpecRule::capture(
            "camera_sized",
            G::Camera,
            K::Camera,
            r"\b(4k|1440p|1080p|720p|\d{1,3}(?:\.\d)?\s*mp)\s+(?:fhd\s+|hd\s+|ir\s+)?(web\s*cam(?:era)?|camera)\b",
            |c: &Captures<'_>| {
                let quality = squash(cap(c, 1)).replace("mp", "MP").replace('k', "K");
                let kind = if cap(c, 2).starts_with("web") {
                    "Webcam"
                } else {
                    "Camera"
                };
                Some(format!("{quality} {kind}"))
            },
        ),
        SpecRule::fixed(
            "camera_ir",
            G::Camera,
            K::Camera,
            r"\bir\s+camera\b|\bwindows\s+hello\b",
            "IR Camera",
        ),
        SpecRule::fixed("webcam", G::Camera, K::Camera, r"\bweb\s*cam(?:era)?\b", "Webcam"),
        // ===== Battery =====
        SpecRule::capture(
            "battery_wh",
            G::Battery,
            K::Battery,
            r"\b(\d{2,3}(?:\.\d)?)\s*wh\b",
            |c: &Captures<'_>| Some(format!("{}Wh Battery", cap(c, 1))),
        ),
        SpecRule::capture(
            "battery_mah",
            G::Battery,
            K::Battery,
            r"\b(\d{3,5})\s*mah\b",
            |c: &Captures<'_>| Some(format!("{}mAh Battery", cap(c, 1))),
        ),
        SpecRule::capture(
            "battery_hours_up_to",
            G::Battery,
            K::Battery,
            r"\bup\s+to\s+(\d{1,2}(?:\.\d)?)\s*(?:hours?|hrs?)\b",
            |c: &Captures<'_>| Some(format!("Up to {} hrs", cap(c, 1))),
        ),
        SpecRule::capture(
            "battery_hours",
            G::Battery,
            K::Battery,
            r"\b(\d{1,2}(?:\.\d)?)[\s-]*(?:hours?|hrs?)\s+(?:of\s+)?battery\b",
            |c: &Captures<'_>| Some(format!("{} hrs", cap(c, 1))),
        ),
        // ===== Weight =====
        SpecRule::capture(
            "weight_kg",
            G::Weight,
            K::Weight,
            r"\b(\d{1,2}(?:\.\d{1,2})?)\s*(?:kg|kilograms?)\b",
            |c: &Captures<'_>| Some(format!("{} kg", cap(c, 1))),
        ),
        SpecRule::capture(
            "weight_lbs",
            G::Weight,
            K::Weight,
            r"\b(\d{1,2}(?:\.\d{1,2})?)\s*(?:lbs?|pounds?)\b",
            |c: &Captures<'_>| Some(format!("{} lbs", cap(c, 1))),
        ),
        SpecRule::capture(
            "weight_grams",
            G::Weight,
            K::Weight,
            r"\b(\d{2,4})\s*grams?\b",
            |c: &Captures<'_>| Some(format!("{} g", cap(c, 1))),
        ),
        // ===== Operating system =====
        SpecRule::capture(
            "windows",
            G::Os,
            K::Os,
            r"\bwindows\s+(11|10)(?:\s+(home|pro))?\b",
            |c: &Captures<'_>| {
                Some(match c.get(2) {
                    Some(edition) => {
                        format!("Windows {} {}", cap(c, 1), title_case(edition.as_str()))
                    }
                    None => format!("Windows {}", cap(c, 1)),
                })
            },
        ),
        SpecRule::fixed("macos", G::Os, K::Os, r"\bmac\s?os\b", "macOS"),
        SpecRule::fixed("chromeos", G::Os, K::Os, r"\bchrome\s?os\b|\bchromebook\b", "ChromeOS"),
        SpecRule::capture(
            "android",
            G::Os,
            K::Os,
            r"\bandroid(?:\s+(\d{1,2}))?\b",
            |c: &Captures<'_>| {
                Some(match c.get(1) {
                    Some(version) => format!("Android {}", version.as_str()),
                    None => "Android".to_string(),
                })
            },
        ),
        SpecRule::capture(
            "ios",
            G::Os,
            K::Os,
            r"\bios(?:\s+(\d{2}))?\b",
            |c: &Captures<'_>| {
                Some(match c.get(1) {
                    Some(version) => format!("iOS {}", version.as_str()),
                    None => "iOS".to_string(),
                })
            },
        ),
        SpecRule::fixed("linux", G::Os, K::Os, r"\b(?:ubuntu|linux)\b", "Linux"),
        // ===== Special features =====
        SpecRule::fixed(
            "fingerprint",
            G::Features,
            K::Features,
            r"\bfingerprint\b",
            "Fingerprint Reader",
        ),
        SpecRule::fixed(
            "convertible",
            G::Features,
            K::Features,
            r"\b2[\s-]in[\s-]1\b|\bconvertible\b",
            "2-in-1 Convertible",
        ),
        SpecRule::fixed(
            "mil_spec",
            G::Features,
            K::Features,
            r"\bmil[\s-]?std[\s-]?810[a-z]?\b",
            "MIL-STD-810 Durability",
        ),
        SpecRule::capture(
            "ip_rating",
            G::Features,
            K::Features,
            r"\bip(6[5-8])\b",
            |c: &Captures<'_>| Some(format!("IP{} Water Resistance", cap(c, 1))),
        ),
        SpecRule::fixed(
            "stylus",
            G::Features,
            K::Features,
            r"\b(?:stylus|pen)\s+(?:support|included)\b",
            "Stylus Support",
        ),
    ]
}
