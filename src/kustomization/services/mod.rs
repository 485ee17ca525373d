mod helm_version_updater;

pub use helm_version_updater::HelmVersionUpdater;
