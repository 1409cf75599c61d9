//! Shipment tab - parties, ports, countries, carriers
//!
//! Picking a port of discharge fills the discharge country; picking a
//! destination country stores its code next to the name.

use super::super::view_model::ExportJobDetailsVm;
use crate::domain::a001_country::api::CountrySource;
use crate::domain::a002_port::api::{GatewayPortSource, PortSource};
use crate::domain::a006_carrier::api::{AirlineSource, ShippingLineSource};
use crate::shared::lookup::{master_options, RemoteLookupField, StaticLookupField};
use contracts::domain::a001_country::aggregate::Country;
use contracts::domain::a002_port::aggregate::{Port, PortDirectory};
use contracts::domain::a009_export_job::aggregate::Shipment;
use contracts::shared::master_data::{CFS_LIST, INDIAN_STATES, NATURE_OF_CARGO, TRANSPORT_MODES};
use leptos::prelude::*;

#[component]
pub fn ShipmentMainTab(vm: ExportJobDetailsVm) -> impl IntoView {
    let job = vm.job;
    let shipment_field = move |get: fn(&Shipment) -> String| {
        Signal::derive(move || job.with(|j| get(&j.shipment)))
    };
    let transport_mode = shipment_field(|s| s.transport_mode.clone());
    let is_air = Signal::derive(move || transport_mode.get().eq_ignore_ascii_case("AIR"));

    let set = move |apply: fn(&mut Shipment, String)| {
        Callback::new(move |value: String| vm.update_shipment(|s| apply(s, value)))
    };

    let on_discharge_port = Callback::new(move |port: Port| {
        if let Some(country) = port.country_hint() {
            vm.update_shipment(|s| s.discharge_country = country);
        }
    });
    let on_destination_country = Callback::new(move |country: Country| {
        vm.update_shipment(|s| s.destination_country_code = country.country_code)
    });
    let discharge_ports = PortSource {
        directory: PortDirectory::World,
    };

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Parties"</h4>
            <div class="details-grid--3col">
                <StaticLookupField
                    options=vm.directories
                    label="Exporter"
                    value=Signal::derive(move || job.with(|j| j.exporter.clone()))
                    on_change=Callback::new(move |v: String| vm.set_exporter(v))
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=vm.directories
                    label="Consignee"
                    value=Signal::derive(move || job.with(|j| j.consignee.clone()))
                    on_change=Callback::new(move |v: String| vm.set_consignee(v))
                    trim_on_blur=true
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Shipment"</h4>
            <div class="details-grid--3col">
                <StaticLookupField
                    options=master_options(TRANSPORT_MODES)
                    label="Transport mode"
                    value=transport_mode
                    on_change=set(|s, v| s.transport_mode = v)
                />
                // Loading port list depends on the mode; re-mount when it changes
                {move || {
                    let source = PortSource {
                        directory: PortDirectory::for_transport_mode(&transport_mode.get()),
                    };
                    view! {
                        <RemoteLookupField
                            source=source
                            label="Port of loading"
                            value=shipment_field(|s| s.port_of_loading.clone())
                            on_change=set(|s, v| s.port_of_loading = v)
                            trim_on_blur=true
                        />
                    }
                }}
                <RemoteLookupField
                    source=GatewayPortSource
                    label="Gateway port"
                    value=shipment_field(|s| s.gateway_port.clone())
                    on_change=set(|s, v| s.gateway_port = v)
                    trim_on_blur=true
                />
                <RemoteLookupField
                    source=discharge_ports
                    label="Port of discharge"
                    value=shipment_field(|s| s.port_of_discharge.clone())
                    on_change=set(|s, v| s.port_of_discharge = v)
                    on_select=on_discharge_port
                    trim_on_blur=true
                />
                <RemoteLookupField
                    source=CountrySource
                    label="Discharge country"
                    value=shipment_field(|s| s.discharge_country.clone())
                    on_change=set(|s, v| s.discharge_country = v)
                    trim_on_blur=true
                />
                <RemoteLookupField
                    source=CountrySource
                    label="Destination country"
                    value=shipment_field(|s| s.destination_country.clone())
                    on_change=set(|s, v| s.destination_country = v)
                    on_select=on_destination_country
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=master_options(INDIAN_STATES)
                    label="State of origin"
                    value=shipment_field(|s| s.state_of_origin.clone())
                    on_change=set(|s, v| s.state_of_origin = v)
                    trim_on_blur=true
                />
                <StaticLookupField
                    options=master_options(CFS_LIST)
                    label="CFS"
                    value=shipment_field(|s| s.cfs.clone())
                    on_change=set(|s, v| s.cfs = v)
                />
                <StaticLookupField
                    options=master_options(NATURE_OF_CARGO)
                    label="Nature of cargo"
                    value=shipment_field(|s| s.nature_of_cargo.clone())
                    on_change=set(|s, v| s.nature_of_cargo = v)
                />
                <Show
                    when=move || is_air.get()
                    fallback=move || {
                        view! {
                            <RemoteLookupField
                                source=ShippingLineSource
                                label="Shipping line"
                                value=shipment_field(|s| s.shipping_line.clone())
                                on_change=set(|s, v| s.shipping_line = v)
                                trim_on_blur=true
                            />
                        }
                    }
                >
                    <RemoteLookupField
                        source=AirlineSource
                        label="Airline"
                        value=shipment_field(|s| s.airline.clone())
                        on_change=set(|s, v| s.airline = v)
                        trim_on_blur=true
                    />
                </Show>
            </div>
        </div>
    }
}
