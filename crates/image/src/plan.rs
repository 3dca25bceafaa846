//! Icon size tables and output layout.
//!
//! The tables mirror what each packaging pipeline expects: Tauri bundle
//! icons, the Xcode App Icon matrix, Android mipmap densities and the
//! Windows Store logo set.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single PNG to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconTarget {
    /// Output file name
    pub file_name: &'static str,
    /// Edge length in pixels
    pub size: u32,
}

impl IconTarget {
    const fn new(file_name: &'static str, size: u32) -> Self {
        Self { file_name, size }
    }
}

/// An Android density bucket (`mipmap-*` directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DensityBucket {
    /// Directory name, e.g. `mipmap-hdpi`
    pub directory: &'static str,
    /// Edge length in pixels
    pub size: u32,
}

const TAURI_ICONS: [IconTarget; 5] = [
    IconTarget::new("32x32.png", 32),
    IconTarget::new("64x64.png", 64),
    IconTarget::new("128x128.png", 128),
    IconTarget::new("128x128@2x.png", 256),
    IconTarget::new("icon.png", 512),
];

const IOS_ICONS: [IconTarget; 18] = [
    IconTarget::new("AppIcon-20x20@1x.png", 20),
    IconTarget::new("AppIcon-20x20@2x.png", 40),
    IconTarget::new("AppIcon-20x20@2x-1.png", 40),
    IconTarget::new("AppIcon-20x20@3x.png", 60),
    IconTarget::new("AppIcon-29x29@1x.png", 29),
    IconTarget::new("AppIcon-29x29@2x.png", 58),
    IconTarget::new("AppIcon-29x29@2x-1.png", 58),
    IconTarget::new("AppIcon-29x29@3x.png", 87),
    IconTarget::new("AppIcon-40x40@1x.png", 40),
    IconTarget::new("AppIcon-40x40@2x.png", 80),
    IconTarget::new("AppIcon-40x40@2x-1.png", 80),
    IconTarget::new("AppIcon-40x40@3x.png", 120),
    IconTarget::new("AppIcon-60x60@2x.png", 120),
    IconTarget::new("AppIcon-60x60@3x.png", 180),
    IconTarget::new("AppIcon-76x76@1x.png", 76),
    IconTarget::new("AppIcon-76x76@2x.png", 152),
    IconTarget::new("AppIcon-83.5x83.5@2x.png", 167),
    IconTarget::new("AppIcon-512@2x.png", 1024),
];

const ANDROID_DENSITIES: [DensityBucket; 5] = [
    DensityBucket { directory: "mipmap-mdpi", size: 48 },
    DensityBucket { directory: "mipmap-hdpi", size: 72 },
    DensityBucket { directory: "mipmap-xhdpi", size: 96 },
    DensityBucket { directory: "mipmap-xxhdpi", size: 144 },
    DensityBucket { directory: "mipmap-xxxhdpi", size: 192 },
];

const ANDROID_LAUNCHERS: [&str; 3] = [
    "ic_launcher.png",
    "ic_launcher_round.png",
    "ic_launcher_foreground.png",
];

const WINDOWS_STORE_LOGOS: [IconTarget; 10] = [
    IconTarget::new("Square30x30Logo.png", 30),
    IconTarget::new("Square44x44Logo.png", 44),
    IconTarget::new("Square71x71Logo.png", 71),
    IconTarget::new("Square89x89Logo.png", 89),
    IconTarget::new("Square107x107Logo.png", 107),
    IconTarget::new("Square142x142Logo.png", 142),
    IconTarget::new("Square150x150Logo.png", 150),
    IconTarget::new("Square284x284Logo.png", 284),
    IconTarget::new("Square310x310Logo.png", 310),
    IconTarget::new("StoreLogo.png", 50),
];

const ICONSET_ENTRIES: [IconTarget; 10] = [
    IconTarget::new("icon_16x16.png", 16),
    IconTarget::new("icon_16x16@2x.png", 32),
    IconTarget::new("icon_32x32.png", 32),
    IconTarget::new("icon_32x32@2x.png", 64),
    IconTarget::new("icon_128x128.png", 128),
    IconTarget::new("icon_128x128@2x.png", 256),
    IconTarget::new("icon_256x256.png", 256),
    IconTarget::new("icon_256x256@2x.png", 512),
    IconTarget::new("icon_512x512.png", 512),
    IconTarget::new("icon_512x512@2x.png", 1024),
];

const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Every asset the generator produces, built once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct IconPlan {
    /// Tauri bundle icons in `src-tauri/icons`
    pub tauri: Vec<IconTarget>,
    /// Xcode App Icon set in `src-tauri/icons/ios`
    pub ios: Vec<IconTarget>,
    /// Android mipmap densities in `src-tauri/icons/android`
    pub android: Vec<DensityBucket>,
    /// Launcher file names written into every density bucket
    pub android_launchers: Vec<&'static str>,
    /// Windows Store logos in `src-tauri/icons`
    pub windows_store: Vec<IconTarget>,
    /// Root level app icon
    pub app_icon: IconTarget,
    /// Tauri icon the ICNS/ICO containers are derived from
    pub container_source: &'static str,
    /// Entries of the macOS `.iconset` packaged into `icon.icns`
    pub icns_entries: Vec<IconTarget>,
    /// Resolutions embedded in `icon.ico`
    pub ico_sizes: Vec<u32>,
}

impl IconPlan {
    /// The standard CaseSpace icon set.
    pub fn standard() -> Self {
        Self {
            tauri: TAURI_ICONS.to_vec(),
            ios: IOS_ICONS.to_vec(),
            android: ANDROID_DENSITIES.to_vec(),
            android_launchers: ANDROID_LAUNCHERS.to_vec(),
            windows_store: WINDOWS_STORE_LOGOS.to_vec(),
            app_icon: IconTarget::new("app-icon.png", 512),
            container_source: "icon.png",
            icns_entries: ICONSET_ENTRIES.to_vec(),
            ico_sizes: ICO_SIZES.to_vec(),
        }
    }

    /// Number of standalone PNG files the plan writes.
    pub fn png_count(&self) -> usize {
        self.tauri.len()
            + self.ios.len()
            + self.android.len() * self.android_launchers.len()
            + self.windows_store.len()
            + 1
    }
}

impl Default for IconPlan {
    fn default() -> Self {
        Self::standard()
    }
}

/// Where generated assets land, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    base_dir: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Layout rooted next to the running executable.
    pub fn beside_executable() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let base = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(base))
    }

    /// Base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `src-tauri/icons`
    pub fn icons_dir(&self) -> PathBuf {
        self.base_dir.join("src-tauri").join("icons")
    }

    /// `src-tauri/icons/ios`
    pub fn ios_dir(&self) -> PathBuf {
        self.icons_dir().join("ios")
    }

    /// `src-tauri/icons/android`
    pub fn android_dir(&self) -> PathBuf {
        self.icons_dir().join("android")
    }

    /// `src-tauri/icons/icon.icns`
    pub fn icns_path(&self) -> PathBuf {
        self.icons_dir().join("icon.icns")
    }

    /// `src-tauri/icons/icon.ico`
    pub fn ico_path(&self) -> PathBuf {
        self.icons_dir().join("icon.ico")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_plan_counts() {
        let plan = IconPlan::standard();
        assert_eq!(plan.tauri.len(), 5);
        assert_eq!(plan.ios.len(), 18);
        assert_eq!(plan.android.len() * plan.android_launchers.len(), 15);
        assert_eq!(plan.windows_store.len(), 10);
        assert_eq!(plan.icns_entries.len(), 10);
        assert_eq!(plan.ico_sizes, vec![16, 32, 48, 64, 128, 256]);
        assert_eq!(plan.png_count(), 49);
    }

    #[test]
    fn test_container_source_is_512_tauri_icon() {
        let plan = IconPlan::standard();
        let source = plan
            .tauri
            .iter()
            .find(|t| t.file_name == plan.container_source)
            .unwrap();
        assert_eq!(source.size, 512);
    }

    #[test]
    fn test_file_names_are_unique_per_directory() {
        let plan = IconPlan::standard();
        let mut icons_dir: Vec<_> = plan
            .tauri
            .iter()
            .chain(plan.windows_store.iter())
            .map(|t| t.file_name)
            .collect();
        icons_dir.sort_unstable();
        icons_dir.dedup();
        assert_eq!(icons_dir.len(), 15);

        let mut ios: Vec<_> = plan.ios.iter().map(|t| t.file_name).collect();
        ios.sort_unstable();
        ios.dedup();
        assert_eq!(ios.len(), 18);
    }

    #[test]
    fn test_plan_serializes() {
        let json = serde_json::to_value(IconPlan::standard()).unwrap();
        assert_eq!(json["app_icon"]["file_name"], "app-icon.png");
        assert_eq!(json["android"][4]["directory"], "mipmap-xxxhdpi");
        assert_eq!(json["android"][4]["size"], 192);
    }

    #[test]
    fn test_output_layout_paths() {
        let layout = OutputLayout::new("/work/app");
        assert_eq!(layout.icons_dir(), PathBuf::from("/work/app/src-tauri/icons"));
        assert_eq!(layout.ios_dir(), PathBuf::from("/work/app/src-tauri/icons/ios"));
        assert_eq!(layout.android_dir(), PathBuf::from("/work/app/src-tauri/icons/android"));
        assert_eq!(layout.ico_path(), PathBuf::from("/work/app/src-tauri/icons/icon.ico"));
        assert_eq!(layout.icns_path(), PathBuf::from("/work/app/src-tauri/icons/icon.icns"));
    }
}
