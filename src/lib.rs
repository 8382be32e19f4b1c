//! Atelier: dress-design intake and rendering.
//!
//! A [`intake::DesignIntake`] collects form values and submits them to a
//! design service. Accepted designs are broadcast on a [`bus::DesignBus`]
//! under the `designSubmitted` name, and a [`renderer::DesignRenderer`]
//! turns each one into a [`design::DesignResult`] (fabric suggestion,
//! pattern measurements, sewing instructions) through a
//! [`generator::DesignGenerator`].
//!
//! # Quick start
//!
//! ```no_run
//! use atelier::api::EchoService;
//! use atelier::generator::MockGenerator;
//! use atelier::intake::FormField;
//! use atelier::session::DesignSession;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let mut session = DesignSession::new(Arc::new(EchoService), Arc::new(MockGenerator::default()));
//! let intake = session.intake_mut();
//! intake.set_field(FormField::DesignType, "evening").unwrap();
//! intake.set_field(FormField::Color, "#112233").unwrap();
//! intake.set_field(FormField::Style, "A-line").unwrap();
//! intake.set_field(FormField::Weight, "65").unwrap();
//! intake.set_field(FormField::Height, "170").unwrap();
//! let state = session.submit_and_wait().await.unwrap();
//! println!("{:?}", state.result().map(|r| &r.making_details.measurements));
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod bus;
pub mod config;
pub mod design;
pub mod error;
pub mod generator;
pub mod intake;
pub mod renderer;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
