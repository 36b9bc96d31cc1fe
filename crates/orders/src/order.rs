use serde::{Deserialize, Serialize};

use storefront_catalog::{Fulfillment, Product, ProductCatalog, ProductType};
use storefront_core::{Aggregate, AggregateRoot, DomainError, DomainResult, Money, OrderNumber};
use storefront_payments::{Payment, PaymentMethod, PaymentOutcome};
use storefront_reporting::{OrderReport, ReportFormat};

use crate::policy::OrderPolicy;
use crate::storefront::Storefront;

/// Order status lifecycle.
///
/// `Unset` → (`Charged` | `Failed`) → `Shipped`. Shipping is not guarded by
/// the payment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Unset,
    Charged,
    Failed,
    Shipped,
}

impl From<PaymentOutcome> for OrderStatus {
    fn from(outcome: PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Charged => OrderStatus::Charged,
            PaymentOutcome::Failed => OrderStatus::Failed,
        }
    }
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    number: OrderNumber,
    quantity: u32,
    address: Vec<String>,
    policy: OrderPolicy,
    status: OrderStatus,
    version: u64,
}

impl Order {
    /// Order for `quantity` units of any catalog product.
    pub fn new(
        number: OrderNumber,
        quantity: u32,
        address: Vec<String>,
        product_type: impl Into<ProductType>,
    ) -> DomainResult<Self> {
        Self::with_policy(number, quantity, address, OrderPolicy::standard(product_type))
    }

    /// Single conference ticket order. Any quantity other than one is rejected.
    pub fn conference_ticket(
        number: OrderNumber,
        quantity: u32,
        address: Vec<String>,
    ) -> DomainResult<Self> {
        Self::with_policy(number, quantity, address, OrderPolicy::ConferenceTicket)
    }

    pub fn with_policy(
        number: OrderNumber,
        quantity: u32,
        address: Vec<String>,
        policy: OrderPolicy,
    ) -> DomainResult<Self> {
        policy.check_quantity(quantity)?;

        Ok(Self {
            number,
            quantity,
            address,
            policy,
            status: OrderStatus::Unset,
            version: 0,
        })
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn address(&self) -> &[String] {
        &self.address
    }

    pub fn policy(&self) -> &OrderPolicy {
        &self.policy
    }

    pub fn product_type(&self) -> &str {
        self.policy.product_type()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn shipping_cost(&self, catalog: &ProductCatalog) -> DomainResult<Money> {
        catalog.shipping_of(self.product_type())
    }

    /// Shipping cost plus quantity times unit price.
    pub fn total(&self, catalog: &ProductCatalog) -> DomainResult<Money> {
        let product = catalog.get(self.product_type())?;
        Ok(product.total_for(self.quantity))
    }

    /// Charge the order total with `method` and record the outcome.
    ///
    /// A declined charge is returned as `PaymentOutcome::Failed`, not as an error.
    pub fn charge(
        &mut self,
        store: &Storefront,
        method: PaymentMethod,
    ) -> DomainResult<PaymentOutcome> {
        let amount = self.total(store.catalog())?;
        let payment = Payment { method, amount };
        let outcome = store.payments().process_payment(&payment)?;

        let command = OrderCommand::RecordPayment(RecordPayment {
            order_number: self.number,
            payment,
            outcome,
        });
        self.execute(&command)?;

        tracing::info!(
            order_number = %self.number,
            product_type = self.product_type(),
            %amount,
            status = ?self.status,
            "order charged"
        );

        Ok(outcome)
    }

    /// Fulfill the order and mark it shipped, whatever its payment status.
    ///
    /// Product types missing from the catalog ship with a shipping label.
    pub fn ship(&mut self, store: &Storefront) -> DomainResult<()> {
        let fulfillment = store
            .catalog()
            .get(self.product_type())
            .map(Product::fulfillment)
            .unwrap_or(Fulfillment::Shipment);

        if self.status != OrderStatus::Charged {
            tracing::warn!(
                order_number = %self.number,
                status = ?self.status,
                "shipping an order that has not been charged"
            );
        }

        let notifier = store.notifier();
        match fulfillment {
            Fulfillment::Download => notifier.send_download_link(self.number),
            Fulfillment::Shipment => notifier.print_shipping_label(self.number),
            Fulfillment::Ticket => {
                notifier.print_ticket(self.number);
                notifier.print_shipping_label(self.number);
            }
        }

        let command = OrderCommand::MarkShipped(MarkShipped {
            order_number: self.number,
        });
        self.execute(&command)?;

        tracing::info!(order_number = %self.number, ?fulfillment, "order shipped");
        Ok(())
    }

    /// Snapshot of the fields printed on reports, with the current total.
    pub fn report(&self, catalog: &ProductCatalog) -> DomainResult<OrderReport> {
        Ok(OrderReport::new(
            self.address.clone(),
            self.quantity,
            self.total(catalog)?,
            self.number,
            ProductType::new(self.product_type()),
        ))
    }

    /// The fixed-width text report.
    pub fn render_report(&self, store: &Storefront) -> DomainResult<String> {
        self.report_as(store, ReportFormat::Text)
    }

    pub fn report_as(&self, store: &Storefront, format: ReportFormat) -> DomainResult<String> {
        let report = self.report(store.catalog())?;
        store.renderers().render(format, &report, store.catalog())
    }
}

impl AggregateRoot for Order {
    type Id = OrderNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: RecordPayment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayment {
    pub order_number: OrderNumber,
    pub payment: Payment,
    pub outcome: PaymentOutcome,
}

/// Command: MarkShipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkShipped {
    pub order_number: OrderNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    RecordPayment(RecordPayment),
    MarkShipped(MarkShipped),
}

/// Event: OrderCharged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCharged {
    pub order_number: OrderNumber,
    pub payment: Payment,
}

/// Event: PaymentFailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFailed {
    pub order_number: OrderNumber,
    pub payment: Payment,
}

/// Event: OrderShipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShipped {
    pub order_number: OrderNumber,
    pub previous_status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderCharged(OrderCharged),
    PaymentFailed(PaymentFailed),
    OrderShipped(OrderShipped),
}

impl OrderEvent {
    /// Stable event name.
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderCharged(_) => "orders.order.charged",
            OrderEvent::PaymentFailed(_) => "orders.order.payment_failed",
            OrderEvent::OrderShipped(_) => "orders.order.shipped",
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::OrderCharged(_) => {
                self.status = OrderStatus::Charged;
            }
            OrderEvent::PaymentFailed(_) => {
                self.status = OrderStatus::Failed;
            }
            OrderEvent::OrderShipped(_) => {
                self.status = OrderStatus::Shipped;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::RecordPayment(cmd) => self.handle_record_payment(cmd),
            OrderCommand::MarkShipped(cmd) => self.handle_mark_shipped(cmd),
        }
    }
}

impl Order {
    fn ensure_order_number(&self, order_number: OrderNumber) -> Result<(), DomainError> {
        if self.number != order_number {
            return Err(DomainError::invariant("order_number mismatch"));
        }
        Ok(())
    }

    // Re-charging is allowed in any status, including after shipping.
    fn handle_record_payment(&self, cmd: &RecordPayment) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_number(cmd.order_number)?;

        let event = match cmd.outcome {
            PaymentOutcome::Charged => OrderEvent::OrderCharged(OrderCharged {
                order_number: cmd.order_number,
                payment: cmd.payment,
            }),
            PaymentOutcome::Failed => OrderEvent::PaymentFailed(PaymentFailed {
                order_number: cmd.order_number,
                payment: cmd.payment,
            }),
        };
        Ok(vec![event])
    }

    fn handle_mark_shipped(&self, cmd: &MarkShipped) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_number(cmd.order_number)?;

        Ok(vec![OrderEvent::OrderShipped(OrderShipped {
            order_number: cmd.order_number,
            previous_status: self.status,
        })])
    }
}
