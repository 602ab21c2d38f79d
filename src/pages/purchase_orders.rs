//! Purchase-orders page: normalized order table with create and delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Purchases;
use crate::components::status_badge::StatusBadge;
use crate::components::top_bar::TopBar;
use crate::net::purchase::{DraftItem, OrderDraft, PurchaseOrder};
use crate::state::session::SessionStore;

/// Purchase-orders page — lists normalized orders and forwards create and
/// delete round-trips to the server; nothing is persisted client-side.
#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let purchases = expect_context::<Purchases>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.signal().get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let orders = LocalResource::new({
        let purchases = purchases.clone();
        move || {
            let purchases = purchases.clone();
            async move { purchases.list().await }
        }
    });

    let error = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let on_delete = {
        let purchases = purchases.clone();
        move |id: String| {
            let purchases = purchases.clone();
            leptos::task::spawn_local(async move {
                match purchases.delete(&id).await {
                    Ok(()) => orders.refetch(),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="orders-page">
            <TopBar/>
            <header class="orders-page__header">
                <h1>"Purchase Orders"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Order"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="orders-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    let on_delete = on_delete.clone();
                    orders.get().map(|result| match result {
                        Ok(list) => view! {
                            <table class="orders-page__table">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Supplier"</th>
                                        <th>"Order Date"</th>
                                        <th>"Expected"</th>
                                        <th>"Status"</th>
                                        <th>"Total"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|order| order_row(order, on_delete.clone()))
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any(),
                        Err(e) => view! { <p class="orders-page__error">{e.to_string()}</p> }
                            .into_any(),
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateOrderDialog on_cancel=on_cancel orders=orders/>
            </Show>
        </div>
    }
}

fn order_row(order: PurchaseOrder, on_delete: impl Fn(String) + 'static) -> impl IntoView {
    let id = order.id.clone();
    view! {
        <tr>
            <td>{order.order_number}</td>
            <td>{order.supplier}</td>
            <td>{order.order_date}</td>
            <td>{order.expected_date}</td>
            <td><StatusBadge label=order.status.label().to_owned()/></td>
            <td>{format!("{:.2}", order.total_amount)}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog for creating a new purchase order with a single line item.
#[component]
fn CreateOrderDialog(
    on_cancel: Callback<()>,
    orders: LocalResource<Result<Vec<PurchaseOrder>, crate::net::client::ApiError>>,
) -> impl IntoView {
    let purchases = expect_context::<Purchases>();

    let supplier_id = RwSignal::new(String::new());
    let order_date = RwSignal::new(String::new());
    let item_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_price = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let draft = OrderDraft {
            supplier_id: supplier_id.get_untracked().trim().to_owned(),
            order_date: order_date.get_untracked(),
            expected_date: None,
            items: vec![DraftItem {
                item_id: item_id.get_untracked().trim().to_owned(),
                quantity: quantity.get_untracked().parse().unwrap_or(0.0),
                unit_price: unit_price.get_untracked().parse().unwrap_or(0.0),
            }],
        };
        if draft.supplier_id.is_empty() {
            error.set(Some("Supplier is required".to_owned()));
            return;
        }
        let purchases = purchases.clone();
        leptos::task::spawn_local(async move {
            match purchases.create(&draft).await {
                Ok(_) => {
                    orders.refetch();
                    on_cancel.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-overlay">
            <form class="dialog" on:submit=submit>
                <h2>"New Purchase Order"</h2>
                <input
                    class="dialog__input"
                    placeholder="Supplier ID"
                    prop:value=supplier_id
                    on:input=move |ev| supplier_id.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=order_date
                    on:input=move |ev| order_date.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    placeholder="Item ID"
                    prop:value=item_id
                    on:input=move |ev| item_id.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="number"
                    placeholder="Quantity"
                    prop:value=quantity
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="number"
                    placeholder="Unit price"
                    prop:value=unit_price
                    on:input=move |ev| unit_price.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">"Create"</button>
                </div>
            </form>
        </div>
    }
}
