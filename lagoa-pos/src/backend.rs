//! Port implementations over the HTTP client

use crate::error::PosResult;
use crate::ports::{
    GuestDirectory, GuestLifecycle, OrderGateway, RoomGateway, StaffGateway, StockCatalog,
};
use async_trait::async_trait;
use lagoa_client::{HttpClient, LagoaApi};
use shared::models::{
    Guest, GuestCheckIn, OrderRecord, Product, Room, RoomStatus, SettlementMethod, Staff,
};
use shared::request::{OrderBatchRequest, OrderListQuery};

#[async_trait]
impl<C: HttpClient> GuestDirectory for LagoaApi<C> {
    async fn by_wristband(&self, uid: &str) -> PosResult<Guest> {
        Ok(self.find_guest_by_wristband(uid).await?)
    }

    async fn by_room(&self, room_number: &str) -> PosResult<Guest> {
        Ok(self.find_guest_by_room(room_number).await?)
    }

    async fn by_name(&self, fragment: &str) -> PosResult<Vec<Guest>> {
        Ok(self.search_guests_by_name(fragment).await?)
    }

    async fn all_by_room(&self, room_id: i64) -> PosResult<Vec<Guest>> {
        Ok(self.guests_by_room_id(room_id).await?)
    }
}

#[async_trait]
impl<C: HttpClient> StockCatalog for LagoaApi<C> {
    async fn list_visible(&self) -> PosResult<Vec<Product>> {
        Ok(self.list_visible_products(None).await?)
    }

    async fn refresh(&self) -> PosResult<Vec<Product>> {
        Ok(self.refresh_products().await?)
    }
}

#[async_trait]
impl<C: HttpClient> OrderGateway for LagoaApi<C> {
    async fn submit_batch(&self, request: &OrderBatchRequest) -> PosResult<Vec<OrderRecord>> {
        Ok(self.submit_order_batch(request).await?)
    }

    async fn list_orders(&self, query: &OrderListQuery) -> PosResult<Vec<OrderRecord>> {
        Ok(LagoaApi::list_orders(self, query).await?)
    }

    async fn cancel_order(&self, order_id: i64, manager_pin: &str) -> PosResult<OrderRecord> {
        Ok(LagoaApi::cancel_order(self, order_id, manager_pin).await?)
    }
}

#[async_trait]
impl<C: HttpClient> GuestLifecycle for LagoaApi<C> {
    async fn check_in(&self, payload: &GuestCheckIn) -> PosResult<Guest> {
        Ok(LagoaApi::check_in(self, payload).await?)
    }

    async fn checkout(&self, guest_id: i64, method: SettlementMethod) -> PosResult<Guest> {
        Ok(self.checkout_guest(guest_id, method).await?)
    }
}

#[async_trait]
impl<C: HttpClient> RoomGateway for LagoaApi<C> {
    async fn list_rooms(&self) -> PosResult<Vec<Room>> {
        Ok(LagoaApi::list_rooms(self).await?)
    }

    async fn update_status(&self, room_id: i64, status: RoomStatus) -> PosResult<Room> {
        Ok(self.update_room_status(room_id, status).await?)
    }
}

#[async_trait]
impl<C: HttpClient> StaffGateway for LagoaApi<C> {
    async fn authenticate(&self, pin: &str) -> PosResult<Staff> {
        Ok(self.authenticate_staff(pin).await?)
    }
}
