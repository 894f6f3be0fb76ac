use crate::auth::AuthMethod;
use crate::config::Config;
use crate::error::ParamsError;
use crate::params::{
    CreateTransformParams, DelDerivedResParams, DelResParams, GetResourceParams, Params,
    ParamsDict, RestoreParams, StreamingProfileCreateParams,
    StreamingProfileUpdateParams, UpdateParams, UpdateTransformParams, UploadMappingParams,
    UploadPresetParams,
};
use crate::rate_limit::FeatureRateLimits;
use crate::results::{
    ApiResponse, DelDerivedResResult, DelResResult, ErrorEnvelope, ListStreamingProfilesResult,
    ListUploadMappingsResult, ListUploadPresetsResult, MessageResult, Resource, RestoreResult,
    StreamingProfileResult, TransformResult, UploadMapping, UploadPreset,
};
use anyhow::{Context, Result, bail};
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Admin API client for one cloud.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthMethod,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(api_base: &str, cloud_name: &str, auth: AuthMethod) -> Result<Self> {
        if cloud_name.trim().is_empty() {
            bail!("Cloud name must not be empty");
        }
        let base_url = format!("{}/v1_1/{}", api_base.trim_end_matches('/'), cloud_name.trim());
        Url::parse(&base_url).with_context(|| format!("Invalid API base URL '{api_base}'"))?;
        let http = HttpClient::builder()
            .user_agent(concat!("mediacli/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            base_url,
            auth,
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base, &config.cloud_name, config.auth.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an Admin API URL from path segments.
    ///
    /// Segments may contain `/` (folder-style public ids); each part is
    /// percent-encoded on its own.
    pub fn admin_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("Base URL cannot be a base: {}", self.base_url))?;
            path.pop_if_empty();
            for segment in segments {
                path.extend(segment.split('/').filter(|s| !s.is_empty()));
            }
        }
        Ok(url)
    }

    pub fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            AuthMethod::Basic {
                api_key,
                api_secret,
            } => {
                let raw = format!("{api_key}:{api_secret}");
                let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
                builder.header("Authorization", format!("Basic {encoded}"))
            }
            AuthMethod::Bearer { token } => builder.header("Authorization", format!("Bearer {token}")),
        }
    }

    /// Send one Admin API call.
    ///
    /// GET and DELETE carry `params` in the query string, POST and PUT as a
    /// form-encoded body.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        params: &ParamsDict,
    ) -> Result<ApiResponse<T>> {
        let mut url = self.admin_url(segments)?;
        let sends_body = method == Method::POST || method == Method::PUT;
        if !sends_body && !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        debug!(%method, %url, "admin api request");
        let start = Instant::now();
        let mut builder = self.http.request(method.clone(), url.clone());
        if sends_body {
            let body = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }
        let builder = self.apply_auth(builder);
        let response = builder
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;

        let status = response.status();
        let rate_limits = FeatureRateLimits::from_headers(response.headers());
        trace!(status = status.as_u16(), elapsed = ?start.elapsed(), ?rate_limits, "admin api response");

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {method} {url}"))?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .map(|e| e.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(body);
            bail!("Request failed: {status} {message}");
        }

        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        let data = serde_json::from_str::<T>(body)
            .with_context(|| format!("Unexpected response shape from {method} {url}"))?;
        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            rate_limits,
        })
    }

    pub async fn list_upload_presets(
        &self,
        next_cursor: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<ApiResponse<ListUploadPresetsResult>> {
        let mut params = ParamsDict::new();
        if let Some(cursor) = next_cursor {
            params.insert("next_cursor".into(), cursor.to_string());
        }
        if let Some(max) = max_results {
            params.insert("max_results".into(), max.to_string());
        }
        self.call(Method::GET, &["upload_presets"], &params).await
    }

    pub async fn get_upload_preset(&self, name: &str) -> Result<ApiResponse<UploadPreset>> {
        require_arg(name, "name")?;
        self.call(Method::GET, &["upload_presets", name], &ParamsDict::new())
            .await
    }

    pub async fn create_upload_preset(
        &self,
        params: &UploadPresetParams,
    ) -> Result<ApiResponse<MessageResult>> {
        let dict = prepare(params)?;
        self.call(Method::POST, &["upload_presets"], &dict).await
    }

    pub async fn update_upload_preset(
        &self,
        params: &UploadPresetParams,
    ) -> Result<ApiResponse<MessageResult>> {
        let dict = prepare(params)?;
        let name = params
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(ParamsError::Missing("name"))?;
        self.call(Method::PUT, &["upload_presets", name], &dict).await
    }

    pub async fn delete_upload_preset(&self, name: &str) -> Result<ApiResponse<MessageResult>> {
        require_arg(name, "name")?;
        self.call(Method::DELETE, &["upload_presets", name], &ParamsDict::new())
            .await
    }

    pub async fn list_upload_mappings(
        &self,
        params: &UploadMappingParams,
    ) -> Result<ApiResponse<ListUploadMappingsResult>> {
        let dict = prepare(params)?;
        self.call(Method::GET, &["upload_mappings"], &dict).await
    }

    pub async fn get_upload_mapping(&self, folder: &str) -> Result<ApiResponse<UploadMapping>> {
        require_arg(folder, "folder")?;
        let dict = ParamsDict::from([("folder".to_string(), folder.to_string())]);
        self.call(Method::GET, &["upload_mappings"], &dict).await
    }

    pub async fn create_upload_mapping(
        &self,
        params: &UploadMappingParams,
    ) -> Result<ApiResponse<MessageResult>> {
        params.check_mapping()?;
        let dict = params.to_params_dict()?;
        self.call(Method::POST, &["upload_mappings"], &dict).await
    }

    pub async fn update_upload_mapping(
        &self,
        params: &UploadMappingParams,
    ) -> Result<ApiResponse<MessageResult>> {
        params.check_mapping()?;
        let dict = params.to_params_dict()?;
        self.call(Method::PUT, &["upload_mappings"], &dict).await
    }

    pub async fn delete_upload_mapping(&self, folder: &str) -> Result<ApiResponse<MessageResult>> {
        require_arg(folder, "folder")?;
        let dict = ParamsDict::from([("folder".to_string(), folder.to_string())]);
        self.call(Method::DELETE, &["upload_mappings"], &dict).await
    }

    pub async fn list_streaming_profiles(&self) -> Result<ApiResponse<ListStreamingProfilesResult>> {
        self.call(Method::GET, &["streaming_profiles"], &ParamsDict::new())
            .await
    }

    pub async fn get_streaming_profile(
        &self,
        name: &str,
    ) -> Result<ApiResponse<StreamingProfileResult>> {
        require_arg(name, "name")?;
        self.call(Method::GET, &["streaming_profiles", name], &ParamsDict::new())
            .await
    }

    pub async fn create_streaming_profile(
        &self,
        params: &StreamingProfileCreateParams,
    ) -> Result<ApiResponse<StreamingProfileResult>> {
        let dict = prepare(params)?;
        self.call(Method::POST, &["streaming_profiles"], &dict).await
    }

    pub async fn update_streaming_profile(
        &self,
        name: &str,
        params: &StreamingProfileUpdateParams,
    ) -> Result<ApiResponse<StreamingProfileResult>> {
        require_arg(name, "name")?;
        let dict = prepare(params)?;
        self.call(Method::PUT, &["streaming_profiles", name], &dict)
            .await
    }

    pub async fn delete_streaming_profile(
        &self,
        name: &str,
    ) -> Result<ApiResponse<StreamingProfileResult>> {
        require_arg(name, "name")?;
        self.call(Method::DELETE, &["streaming_profiles", name], &ParamsDict::new())
            .await
    }

    pub async fn get_transform(&self, transformation: &str) -> Result<ApiResponse<TransformResult>> {
        require_arg(transformation, "transformation")?;
        let dict = ParamsDict::from([("transformation".to_string(), transformation.to_string())]);
        self.call(Method::GET, &["transformations"], &dict).await
    }

    pub async fn create_transform(
        &self,
        params: &CreateTransformParams,
    ) -> Result<ApiResponse<MessageResult>> {
        let dict = prepare(params)?;
        self.call(Method::POST, &["transformations"], &dict).await
    }

    pub async fn update_transform(
        &self,
        params: &UpdateTransformParams,
    ) -> Result<ApiResponse<MessageResult>> {
        let dict = prepare(params)?;
        self.call(Method::PUT, &["transformations"], &dict).await
    }

    pub async fn delete_transform(&self, transformation: &str) -> Result<ApiResponse<MessageResult>> {
        require_arg(transformation, "transformation")?;
        let dict = ParamsDict::from([("transformation".to_string(), transformation.to_string())]);
        self.call(Method::DELETE, &["transformations"], &dict).await
    }

    pub async fn get_resource(&self, params: &GetResourceParams) -> Result<ApiResponse<Resource>> {
        let dict = prepare(params)?;
        let rt = params.resource_type.as_str();
        self.call(
            Method::GET,
            &["resources", rt, &params.r#type, &params.public_id],
            &dict,
        )
        .await
    }

    pub async fn update_resource(&self, params: &UpdateParams) -> Result<ApiResponse<Resource>> {
        let dict = prepare(params)?;
        let rt = params.resource_type.as_str();
        self.call(
            Method::POST,
            &["resources", rt, &params.r#type, &params.public_id],
            &dict,
        )
        .await
    }

    /// Delete by tag when one is given, otherwise by ids, prefix or `all`.
    pub async fn delete_resources(&self, params: &DelResParams) -> Result<ApiResponse<DelResResult>> {
        let dict = prepare(params)?;
        let rt = params.resource_type.as_str();
        match params.tag.as_deref().filter(|t| !t.is_empty()) {
            Some(tag) => {
                self.call(Method::DELETE, &["resources", rt, "tags", tag], &dict)
                    .await
            }
            None => {
                self.call(Method::DELETE, &["resources", rt, &params.r#type], &dict)
                    .await
            }
        }
    }

    /// Derived ids go to `derived_resources`; transformations are removed
    /// from the original asset while keeping it. The two cannot be mixed.
    pub async fn delete_derived_resources(
        &self,
        params: &DelDerivedResParams,
    ) -> Result<ApiResponse<DelDerivedResResult>> {
        let mut dict = prepare(params)?;
        if !params.has_transformations() {
            return self.call(Method::DELETE, &["derived_resources"], &dict).await;
        }
        if let Some(public_id) = &params.public_id {
            dict.insert("public_ids".into(), public_id.clone());
        }
        dict.insert("keep_original".into(), "true".into());
        let rt = params.resource_type.as_str();
        self.call(Method::DELETE, &["resources", rt, &params.r#type], &dict)
            .await
    }

    pub async fn restore(&self, params: &RestoreParams) -> Result<ApiResponse<RestoreResult>> {
        let dict = prepare(params)?;
        let rt = params.resource_type.as_str();
        self.call(Method::POST, &["resources", rt, &params.r#type, "restore"], &dict)
            .await
    }
}

fn prepare<P: Params>(params: &P) -> Result<ParamsDict> {
    params.check()?;
    Ok(params.to_params_dict()?)
}

fn require_arg(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParamsError::Missing(field).into());
    }
    Ok(())
}
