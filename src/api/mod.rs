//! Typed HTTP client for the Webees backend.
//!
//! One async function per endpoint. List endpoints tolerate both observed
//! wire shapes via [`ListResponse`]; create endpoints are acknowledged with
//! a bare `{ success }` flag. No auth, no pagination, no retries.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::common::ApiError;
use crate::config;
use crate::models::{
    Client, ContactRequest, ContactSubmission, ListResponse, NewsletterRequest,
    NewsletterSubscription, Project, StatusResponse,
};

/// List showcased projects.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    get_list("projects").await
}

/// List client testimonials.
pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    get_list("clients").await
}

/// List contact-form submissions (admin).
pub async fn fetch_contacts() -> Result<Vec<ContactSubmission>, ApiError> {
    get_list("contact").await
}

/// List newsletter subscriptions (admin).
pub async fn fetch_newsletters() -> Result<Vec<NewsletterSubscription>, ApiError> {
    get_list("newsletter").await
}

/// Submit the public consultation form.
pub async fn submit_contact(request: &ContactRequest) -> Result<(), ApiError> {
    post_json("contact", request).await
}

/// Subscribe an email address to the newsletter.
pub async fn subscribe_newsletter(request: &NewsletterRequest) -> Result<(), ApiError> {
    post_json("newsletter", request).await
}

/// Create a project with its gallery image (multipart).
pub async fn create_project(name: &str, description: &str, image: &File) -> Result<(), ApiError> {
    let form = FormData::new()?;
    form.append_with_str("name", name)?;
    form.append_with_str("description", description)?;
    form.append_with_blob_and_filename("image", image, &image.name())?;
    post_multipart("projects", form).await
}

/// Create a client testimonial with its portrait image (multipart).
pub async fn create_client(
    name: &str,
    description: &str,
    designation: &str,
    image: &File,
) -> Result<(), ApiError> {
    let form = FormData::new()?;
    form.append_with_str("name", name)?;
    form.append_with_str("description", description)?;
    form.append_with_str("designation", designation)?;
    form.append_with_blob_and_filename("image", image, &image.name())?;
    post_multipart("clients", form).await
}

async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let response = Request::get(&config::api_url(path)).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json::<ListResponse<T>>().await?.into_items()
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(&config::api_url(path))
        .json(body)?
        .send()
        .await?;
    ack(response).await
}

async fn post_multipart(path: &str, form: FormData) -> Result<(), ApiError> {
    // The browser sets the multipart content type, boundary included.
    let response = Request::post(&config::api_url(path))
        .body(form)?
        .send()
        .await?;
    ack(response).await
}

async fn ack(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let status: StatusResponse = response.json().await?;
    if status.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}
