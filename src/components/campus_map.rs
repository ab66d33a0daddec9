//! Campus Map Component
//!
//! Embedded map iframe and key campus locations.

use leptos::prelude::*;

use crate::reference::{
    location_search_url, CAMPUS_DIRECTIONS_URL, CAMPUS_LOCATIONS, CAMPUS_MAP_EMBED_URL,
    CAMPUS_MAP_PLACE_URL,
};

#[component]
pub fn CampusMap() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3>"📍 University of Galway Campus"</h3>
                <p class="muted">"Interactive map of the campus and key locations"</p>
            </div>
            <div class="map-frame">
                <iframe
                    src=CAMPUS_MAP_EMBED_URL
                    width="100%"
                    height="100%"
                    style="border: 0;"
                    allowfullscreen=true
                    referrerpolicy="no-referrer-when-downgrade"
                    title="University of Galway Campus Map"
                ></iframe>
            </div>
            <div class="map-actions">
                <a class="primary-btn" href=CAMPUS_MAP_PLACE_URL target="_blank" rel="noopener noreferrer">
                    "Open in Google Maps"
                </a>
                <a class="outline-btn" href=CAMPUS_DIRECTIONS_URL target="_blank" rel="noopener noreferrer">
                    "Get Directions"
                </a>
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <h3>"Key Locations"</h3>
                <p class="muted">"Important places on campus"</p>
            </div>
            <div class="link-grid">
                {CAMPUS_LOCATIONS.iter().map(|location| view! {
                    <a
                        class="location-card"
                        href=location_search_url(location)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class="location-pin">"📍"</span>
                        <div>
                            <p class="location-name">{location.name}</p>
                            <span class="badge outline">{location.kind}</span>
                        </div>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
