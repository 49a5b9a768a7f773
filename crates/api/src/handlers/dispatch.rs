use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use fanout_core::AggregateResponse;
use fanout_dispatcher::aggregate;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::routes::AppState;

/// 分发请求体，`input`为必填字段，允许为空字符串
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub input: String,
}

/// 分发端点处理器
///
/// 请求体无效（非JSON或缺少`input`）时直接返回400，不会调用任何Worker。
/// 合法请求驱动完整流水线，无论各Worker成败都返回200。
pub async fn dispatch_input(
    State(state): State<AppState>,
    payload: Result<Json<DispatchRequest>, JsonRejection>,
) -> ApiResult<Json<AggregateResponse>> {
    let Json(request) = payload
        .map_err(|rejection| crate::error::ApiError::BadRequest(rejection.body_text()))?;

    info!("收到分发请求: input_len={}", request.input.len());

    let results = state.coordinator.dispatch(&request.input).await;
    let response = aggregate(&results);

    Ok(Json(response))
}
