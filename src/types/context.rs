use super::device::{DeviceType, Orientation};
use super::units::BASELINE_DPI;

/// Snapshot of the device and window state a query is matched against.
///
/// Produced by the host whenever the environment changes; the engine only
/// reads it.
///
/// # Example
///
/// ```
/// use mediaq::{DeviceType, MediaContext, Orientation};
///
/// let ctx = MediaContext::new(700.0, 1000.0)
///     .with_density_dpi(320.0)
///     .with_orientation(Orientation::Portrait)
///     .with_dark_mode(true)
///     .with_device_type(DeviceType::Tablet);
///
/// assert_eq!(ctx.density(), 2.0);
/// assert_eq!(ctx.device_width_dp(), 700.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaContext {
    width_dp: f64,
    height_dp: f64,
    density_dpi: f64,
    orientation: Orientation,
    dark_mode: bool,
    device_type: DeviceType,
    round_screen: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    device_width_dp: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    device_height_dp: Option<f64>,
}

impl Default for MediaContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl MediaContext {
    /// Create a snapshot for a window of the given size in dp. Everything else
    /// starts at its neutral value: 160 dpi, portrait, light mode, default
    /// device type, rectangular screen.
    #[must_use]
    pub fn new(width_dp: f64, height_dp: f64) -> Self {
        Self {
            width_dp,
            height_dp,
            density_dpi: BASELINE_DPI,
            orientation: Orientation::Portrait,
            dark_mode: false,
            device_type: DeviceType::Default,
            round_screen: false,
            device_width_dp: None,
            device_height_dp: None,
        }
    }

    #[must_use]
    pub fn with_density_dpi(mut self, density_dpi: f64) -> Self {
        self.density_dpi = density_dpi;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    #[must_use]
    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    #[must_use]
    pub fn with_round_screen(mut self, round_screen: bool) -> Self {
        self.round_screen = round_screen;
        self
    }

    /// Physical screen width in dp, when it differs from the window width.
    #[must_use]
    pub fn with_device_width_dp(mut self, device_width_dp: f64) -> Self {
        self.device_width_dp = Some(device_width_dp);
        self
    }

    /// Physical screen height in dp, when it differs from the window height.
    #[must_use]
    pub fn with_device_height_dp(mut self, device_height_dp: f64) -> Self {
        self.device_height_dp = Some(device_height_dp);
        self
    }

    #[must_use]
    pub fn width_dp(&self) -> f64 {
        self.width_dp
    }

    #[must_use]
    pub fn height_dp(&self) -> f64 {
        self.height_dp
    }

    #[must_use]
    pub fn density_dpi(&self) -> f64 {
        self.density_dpi
    }

    /// Physical pixels per dp (`density_dpi / 160`).
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density_dpi / BASELINE_DPI
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    #[must_use]
    pub fn is_round_screen(&self) -> bool {
        self.round_screen
    }

    /// Falls back to [`width_dp`](Self::width_dp) when not set.
    #[must_use]
    pub fn device_width_dp(&self) -> f64 {
        self.device_width_dp.unwrap_or(self.width_dp)
    }

    /// Falls back to [`height_dp`](Self::height_dp) when not set.
    #[must_use]
    pub fn device_height_dp(&self) -> f64 {
        self.device_height_dp.unwrap_or(self.height_dp)
    }
}
