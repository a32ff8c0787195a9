pub mod date_codec;
pub mod histogram;
pub mod reshaper;
pub mod season_classifier;

pub use date_codec::{decode_date, encode_date};
pub use histogram::{bin_index, build_bins, count_per_season, histogram, Bin, SeasonCounts};
pub use reshaper::{reshape_observations, ObservationReshaper};
pub use season_classifier::{classify, label_seasons, season_for_month, SeasonalRecord};
