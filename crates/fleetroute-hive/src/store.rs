use crate::error::{AppError, AppResult};
use fleetroute_core::fingerprint::RouteFingerprint;
use fleetroute_core::protocol::{OptimizationResult, RouteSummary, StoredRoute};
use fleetroute_core::waypoint::OptimizedWaypoint;
use sqlx::{Pool, Row, Sqlite};

pub const MAX_NAME_LEN: usize = 100;

#[derive(Clone)]
pub struct Store {
    pub db: Pool<Sqlite>,
}

impl Store {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// Persists an optimized route under its fingerprint.
    ///
    /// Returns `(route_id, is_new)`. A stop list that was stored before keeps
    /// its original row and nothing is written. Only the id conflict is
    /// skipped; every other constraint failure is an error.
    pub async fn insert_route(
        &self,
        name: &str,
        fingerprint: &RouteFingerprint,
        result: &OptimizationResult,
    ) -> AppResult<(String, bool)> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Route name is required".into()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(AppError::Validation("Route name too long".into()));
        }
        if !result.is_finite() {
            return Err(AppError::Validation(
                "Route metrics are not finite; check the waypoint coordinates".into(),
            ));
        }

        let route_id = fingerprint.hash.clone();
        let created_at = chrono::Utc::now().to_rfc3339();

        let mut tx = self.db.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO routes (id, name, total_distance, baseline_distance, estimated_duration, optimization_score, fuel_savings, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) ON CONFLICT(id) DO NOTHING",
        )
        .bind(&route_id)
        .bind(name)
        .bind(result.total_distance)
        .bind(result.baseline_distance)
        .bind(result.estimated_duration)
        .bind(result.optimization_score)
        .bind(result.fuel_savings)
        .bind(&created_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            // Dropping the transaction rolls it back.
            return Ok((route_id, false));
        }

        for wp in &result.optimized_waypoints {
            sqlx::query(
                "INSERT INTO route_waypoints (route_id, sequence, name, lat, lng) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&route_id)
            .bind(wp.sequence as i64)
            .bind(&wp.name)
            .bind(wp.lat)
            .bind(wp.lng)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok((route_id, true))
    }

    pub async fn get_route(&self, route_id: &str) -> AppResult<Option<StoredRoute>> {
        let row = sqlx::query(
            "SELECT id, name, total_distance, baseline_distance, estimated_duration, optimization_score, fuel_savings, created_at FROM routes WHERE id = ?",
        )
        .bind(route_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let stops = sqlx::query(
            "SELECT sequence, name, lat, lng FROM route_waypoints WHERE route_id = ? ORDER BY sequence ASC",
        )
        .bind(route_id)
        .fetch_all(&self.db)
        .await?;

        let waypoints = stops
            .iter()
            .map(|s| OptimizedWaypoint {
                name: s.get("name"),
                lat: s.get("lat"),
                lng: s.get("lng"),
                sequence: s.get::<i64, _>("sequence") as u32,
            })
            .collect();

        Ok(Some(StoredRoute {
            route_id: r.get("id"),
            name: r.get("name"),
            total_distance: r.get("total_distance"),
            baseline_distance: r.get("baseline_distance"),
            estimated_duration: r.get("estimated_duration"),
            optimization_score: r.get("optimization_score"),
            fuel_savings: r.get("fuel_savings"),
            created_at: r.get("created_at"),
            waypoints,
        }))
    }

    /// Most recent routes first.
    pub async fn list_routes(&self, limit: i64) -> AppResult<Vec<RouteSummary>> {
        let rows = sqlx::query(
            "SELECT id, name, total_distance, optimization_score, created_at FROM routes ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .iter()
            .map(|r| RouteSummary {
                route_id: r.get("id"),
                name: r.get("name"),
                total_distance: r.get("total_distance"),
                optimization_score: r.get("optimization_score"),
                created_at: r.get("created_at"),
            })
            .collect())
    }
}
