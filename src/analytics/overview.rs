use crate::analytics::aggregates::{
    bottom_n, city_options, count_by_bathrooms, count_by_bedrooms, count_by_city,
    count_by_district, histogram, mean_by_district, mean_price_by_city_district, top_n,
    CategoryCount, CityDistrictMean, GroupMean, HistogramBin, DEFAULT_MAX_BINS,
};
use crate::data::Dataset;
use crate::domain::Measure;

pub const RANKING_SIZE: usize = 5;

/// Every static view of the visualization tab, computed once per dataset.
#[derive(Debug, Clone)]
pub struct Overview {
    pub total_listings: usize,
    pub city_counts: Vec<CategoryCount>,
    pub land_area_histogram: Vec<HistogramBin>,
    pub building_area_histogram: Vec<HistogramBin>,
    pub bedroom_counts: Vec<CategoryCount>,
    pub bathroom_counts: Vec<CategoryCount>,
    pub district_counts: Vec<CategoryCount>,
    pub mean_price_by_district: Vec<GroupMean>,
    pub mean_building_area_by_district: Vec<GroupMean>,
    pub most_expensive: Vec<GroupMean>,
    pub cheapest: Vec<GroupMean>,
    pub largest_buildings: Vec<GroupMean>,
    pub smallest_buildings: Vec<GroupMean>,
    /// Mean price per (city, sub-district); source of the interactive view.
    pub city_district_prices: Vec<CityDistrictMean>,
    pub cities: Vec<String>,
}

impl Overview {
    pub fn compute(dataset: &Dataset) -> Self {
        let listings = dataset.listings();

        let land: Vec<f64> = listings.iter().map(|l| l.land_area).collect();
        let building: Vec<f64> = listings.iter().map(|l| l.building_area).collect();

        let mean_price_by_district = mean_by_district(listings, Measure::Price);
        let mean_building_area_by_district = mean_by_district(listings, Measure::BuildingArea);
        let city_district_prices = mean_price_by_city_district(listings);

        Self {
            total_listings: listings.len(),
            city_counts: count_by_city(listings),
            land_area_histogram: histogram(&land, DEFAULT_MAX_BINS),
            building_area_histogram: histogram(&building, DEFAULT_MAX_BINS),
            bedroom_counts: count_by_bedrooms(listings),
            bathroom_counts: count_by_bathrooms(listings),
            district_counts: count_by_district(listings),
            most_expensive: top_n(&mean_price_by_district, RANKING_SIZE),
            cheapest: bottom_n(&mean_price_by_district, RANKING_SIZE),
            largest_buildings: top_n(&mean_building_area_by_district, RANKING_SIZE),
            smallest_buildings: bottom_n(&mean_building_area_by_district, RANKING_SIZE),
            cities: city_options(&city_district_prices),
            mean_price_by_district,
            mean_building_area_by_district,
            city_district_prices,
        }
    }
}
